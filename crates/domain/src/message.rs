use std::fmt;

use crate::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    NxDomain,
    Refused,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rcode: ResponseCode,
}

/// A response message. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub answer: Vec<Record>,
    pub authority: Vec<Record>,
    /// Always empty for now; reserved for glue.
    pub additional: Vec<Record>,
}

impl Message {
    pub fn new(rcode: ResponseCode) -> Self {
        Self {
            header: Header { rcode },
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn with_answer(mut self, answer: Vec<Record>) -> Self {
        self.answer = answer;
        self
    }

    pub fn with_authority(mut self, authority: Vec<Record>) -> Self {
        self.authority = authority;
        self
    }

    pub fn rcode(&self) -> ResponseCode {
        self.header.rcode
    }
}

/// Outcome of a query at the service boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answer(Message),
    /// Another responder is authoritative; forward the caller there.
    Redirect { location: String },
}
