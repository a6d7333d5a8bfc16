//! # Telemetry Flow
//!
//! Admission and delivery counters as exported on the metrics endpoint.

#[cfg(test)]
mod tests {
    use crate::fixtures::{channel_creation_proposal, OrderingNode};
    use qc_18_channel_admission::{ConsensusState, Rule};
    use qc_19_block_delivery::{
        BlocksRequester, LedgerHeightTracker, MpscDeliverer, StaticCredentials,
    };
    use qc_telemetry::{env_filter, init_logging, render_metrics, TelemetryConfig};
    use shared_crypto::LocalSigner;
    use std::sync::Arc;

    #[test]
    fn test_admission_counters_exported() {
        let _ = init_logging(&TelemetryConfig::for_testing("qc-18-channel-admission"));
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");

        node.rules
            .apply(&channel_creation_proposal("metered", &signer).unwrap())
            .unwrap();
        node.system.set_consensus_state(ConsensusState::Maintenance);
        let _ = node
            .rules
            .apply(&channel_creation_proposal("forbidden", &signer).unwrap());

        let body = render_metrics().unwrap();
        assert!(body.contains("admission_channels_created_total"));
        assert!(body.contains("kind=\"ChannelCreationForbidden\""));
    }

    #[tokio::test]
    async fn test_seek_counters_exported() {
        let (client, mut rx) = MpscDeliverer::channel(1);
        let requester = BlocksRequester::new(
            false,
            "mychannel",
            Arc::new(client),
            Arc::new(LocalSigner::generate("Org1MSP")),
            Arc::new(StaticCredentials::empty()),
        );
        requester
            .request_blocks(&LedgerHeightTracker::new(4))
            .await
            .unwrap();
        rx.recv().await.unwrap();

        let body = render_metrics().unwrap();
        assert!(body.contains("deliver_seek_requests_total"));
        assert!(body.contains("start=\"specified\""));
    }

    #[test]
    fn test_service_config_builds_filter() {
        let config = TelemetryConfig::from_env("qc-19-block-delivery");
        assert_eq!(config.service_name, "qc-19-block-delivery");
        assert!(env_filter(&config).is_ok());
    }
}
