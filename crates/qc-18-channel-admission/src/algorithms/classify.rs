//! Message classification by channel header type.

use shared_types::{ChannelHeader, HeaderType};

use crate::domain::MessageClass;

/// Processing class of a message.
///
/// `ORDERER_TRANSACTION` is treated as config: on the system channel it
/// carries a wrapped channel-creation config.
pub fn classify_msg(chdr: &ChannelHeader) -> MessageClass {
    match chdr.kind() {
        Some(HeaderType::ConfigUpdate) => MessageClass::ConfigUpdate,
        Some(HeaderType::Config) | Some(HeaderType::OrdererTransaction) => MessageClass::Config,
        _ => MessageClass::Normal,
    }
}
