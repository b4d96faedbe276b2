//! Inbound adapters translating external requests into domain port calls.
//!
//! REST handlers live under [`http`]; they see the domain only through the
//! driving ports held in [`http::state::HttpState`].

pub mod http;
