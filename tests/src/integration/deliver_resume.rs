//! # Deliver Resume Flow
//!
//! A requester resuming from a local ledger, its seek requests read off the
//! transport channel and checked the way an ordering node would.

#[cfg(test)]
mod tests {
    use crate::fixtures::{client_certificate, OrderingNode};
    use qc_18_channel_admission::{classify_msg, MessageClass, Rule};
    use qc_19_block_delivery::{
        BlocksRequester, DeliverConfig, DeliverError, LedgerHeightTracker, MpscDeliverer,
        SendError, StaticCredentials,
    };
    use shared_crypto::{compute_sha256, LocalSigner};
    use shared_types::{
        unmarshal, verify_envelope, ChannelHeader, Envelope, SeekInfo, SeekPosition,
    };
    use std::io::Write;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn decode(env: &Envelope) -> (ChannelHeader, SeekInfo) {
        let payload = env.unwrap_payload().unwrap();
        let header = payload.header.unwrap().unmarshal_channel_header().unwrap();
        (header, unmarshal(&payload.data).unwrap())
    }

    fn plaintext_requester() -> (BlocksRequester, mpsc::Receiver<Envelope>) {
        let (client, rx) = MpscDeliverer::channel(8);
        let requester = BlocksRequester::new(
            false,
            "mychannel",
            Arc::new(client),
            Arc::new(LocalSigner::generate("Org1MSP")),
            Arc::new(StaticCredentials::empty()),
        );
        (requester, rx)
    }

    // =========================================================================
    // RESUME
    // =========================================================================

    #[tokio::test]
    async fn test_resume_follows_ledger_height() {
        let ledger = LedgerHeightTracker::new(0);
        let (requester, mut rx) = plaintext_requester();

        requester.request_blocks(&ledger).await.unwrap();
        let (_, seek) = decode(&rx.recv().await.unwrap());
        assert_eq!(seek.start, SeekPosition::Oldest);

        for _ in 0..3 {
            ledger.commit_block();
        }
        requester.request_blocks(&ledger).await.unwrap();
        let (header, seek) = decode(&rx.recv().await.unwrap());
        assert_eq!(seek.start, SeekPosition::Specified(3));
        assert_eq!(seek.stop, SeekPosition::Specified(u64::MAX));
        assert_eq!(header.channel_id, "mychannel");
    }

    #[tokio::test]
    async fn test_request_is_signed_by_requester() {
        let ledger = LedgerHeightTracker::new(7);
        let (requester, mut rx) = plaintext_requester();

        requester.request_blocks(&ledger).await.unwrap();
        let env = rx.recv().await.unwrap();
        assert_eq!(verify_envelope(&env).unwrap().msp_id, "Org1MSP");

        let (header, _) = decode(&env);
        assert!(header.tls_cert_hash.is_empty());
    }

    // =========================================================================
    // TLS BINDING
    // =========================================================================

    #[tokio::test]
    async fn test_tls_binding_from_certificate_file() {
        let (der, pem) = client_certificate("peer0.org1.example.com");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(pem.as_bytes()).unwrap();

        let (client, mut rx) = MpscDeliverer::channel(1);
        let config = DeliverConfig {
            tls_enabled: true,
            client_cert_path: Some(file.path().to_path_buf()),
        };
        let requester = BlocksRequester::from_config(
            &config,
            "mychannel",
            Arc::new(client),
            Arc::new(LocalSigner::generate("Org1MSP")),
        )
        .unwrap();

        requester
            .request_blocks(&LedgerHeightTracker::new(2))
            .await
            .unwrap();
        let (header, seek) = decode(&rx.recv().await.unwrap());
        assert_eq!(header.tls_cert_hash, compute_sha256(der.as_ref()).to_vec());
        assert_eq!(seek.start, SeekPosition::Specified(2));
    }

    // =========================================================================
    // ORDERER SIDE
    // =========================================================================

    #[tokio::test]
    async fn test_seek_request_passes_system_channel_rules() {
        let node = OrderingNode::new(0);
        let (requester, mut rx) = plaintext_requester();
        requester
            .request_blocks(&LedgerHeightTracker::new(0))
            .await
            .unwrap();
        let env = rx.recv().await.unwrap();

        let (header, _) = decode(&env);
        assert_eq!(classify_msg(&header), MessageClass::Normal);

        node.rules.apply(&env).unwrap();
        assert_eq!(node.registrar.channel_ids(), Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_closed_stream_surfaces_send_error() {
        let (requester, rx) = plaintext_requester();
        drop(rx);

        let err = requester
            .request_blocks(&LedgerHeightTracker::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliverError::SendError(SendError::Closed)));
        assert_eq!(err.to_string(), "delivery stream closed");
    }
}
