//! Application layer

mod requester;


pub use requester::BlocksRequester;
