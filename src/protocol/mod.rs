//! Protocol module for cdp-wire

pub mod error;
pub mod message;

pub use error::{
    classify, CdpError, DecodeError, Result as ProtocolResult, CATALOG, ERR_CTX_DESTROYED,
    ERR_CTX_NOT_FOUND, ERR_NODE_NOT_FOUND_AT_POS, ERR_NOT_ATTACHED_TO_ACTIVE_PAGE,
    ERR_OBJ_NOT_FOUND, ERR_SEARCH_SESSION_NOT_FOUND, ERR_SESSION_NOT_FOUND,
};
pub use message::{Event, Request, Response};
