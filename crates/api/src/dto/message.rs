use serde::{Deserialize, Serialize};
use zonecast_domain::{Message, Record};

/// Wire shape of a record in a query response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDto {
    /// Fully qualified, with the trailing dot.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub rdata: String,
    pub ttl: u32,
    pub class: String,
}

impl RecordDto {
    pub fn from_domain(record: &Record) -> Self {
        Self {
            name: record.fqdn(),
            record_type: record.record_type.to_string(),
            rdata: record.rdata.to_string(),
            ttl: record.ttl,
            class: record.class().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderDto {
    pub rcode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub header: HeaderDto,
    pub answer: Vec<RecordDto>,
    pub authority: Vec<RecordDto>,
    pub additional: Vec<RecordDto>,
}

impl MessageResponse {
    pub fn from_domain(message: &Message) -> Self {
        let section = |records: &[Record]| -> Vec<RecordDto> {
            records.iter().map(RecordDto::from_domain).collect()
        };
        Self {
            header: HeaderDto {
                rcode: message.rcode().as_str().to_string(),
            },
            answer: section(&message.answer),
            authority: section(&message.authority),
            additional: section(&message.additional),
        }
    }
}
