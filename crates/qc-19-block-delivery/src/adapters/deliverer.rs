//! Delivery client over an in-process channel.
//!
//! The receiving half stands in for the transport. Dropping it tears the
//! stream down, after which every send fails with [`SendError::Closed`].

use async_trait::async_trait;
use shared_types::Envelope;
use tokio::sync::mpsc;

use crate::domain::SendError;
use crate::ports::BlocksDeliverer;

/// [`BlocksDeliverer`] backed by a bounded tokio channel.
#[derive(Clone, Debug)]
pub struct MpscDeliverer {
    tx: mpsc::Sender<Envelope>,
}

impl MpscDeliverer {
    /// Deliverer plus the receiving end of its stream.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<Envelope>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    /// Wrap an existing sender.
    pub fn new(tx: mpsc::Sender<Envelope>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl BlocksDeliverer for MpscDeliverer {
    async fn send(&self, env: Envelope) -> Result<(), SendError> {
        self.tx.send(env).await.map_err(|_| SendError::Closed)
    }
}
