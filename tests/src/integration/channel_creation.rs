//! # Channel Creation Flow
//!
//! Drives real signed proposals through the full system channel rule set
//! into the in-memory registrar.

#[cfg(test)]
mod tests {
    use crate::fixtures::{
        channel_creation_proposal, sample_write_set, OrderingNode, SYSTEM_CHANNEL,
    };
    use qc_18_channel_admission::{
        classify_msg, AcceptAllMetadataValidator, AdmissionError, ChainCreator,
        ChannelConfigError, ConsensusState, FilterOutcome, MessageClass, Rule,
        SystemChannelFilter,
    };
    use shared_crypto::LocalSigner;
    use shared_types::{
        create_signed_envelope, make_channel_creation_transaction, verify_envelope, Config,
        ConfigEnvelope, Envelope, HeaderType,
    };
    use std::sync::Arc;

    fn outer_class(env: &Envelope) -> MessageClass {
        let header = env
            .unwrap_payload()
            .unwrap()
            .header
            .unwrap()
            .unmarshal_channel_header()
            .unwrap();
        classify_msg(&header)
    }

    // =========================================================================
    // ADMISSION
    // =========================================================================

    #[test]
    fn test_proposal_creates_channel() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");
        let proposal = channel_creation_proposal("mychannel", &signer).unwrap();

        assert_eq!(outer_class(&proposal), MessageClass::Config);
        assert_eq!(verify_envelope(&proposal).unwrap().msp_id, "SampleOrg");

        node.rules.apply(&proposal).unwrap();
        assert!(node.registrar.contains("mychannel"));
        assert_eq!(node.registrar.channels_count(), 1);
    }

    #[test]
    fn test_filter_reports_created_channel() {
        let node = OrderingNode::new(0);
        let filter = SystemChannelFilter::new(
            node.system.clone(),
            node.registrar.clone(),
            Arc::new(AcceptAllMetadataValidator),
        );
        let signer = LocalSigner::generate("SampleOrg");

        let outcome = filter
            .apply(&channel_creation_proposal("audit", &signer).unwrap())
            .unwrap();
        assert_eq!(
            outcome,
            FilterOutcome::ChannelCreated {
                channel_id: "audit".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_channel_rejected_at_commit() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");
        node.rules
            .apply(&channel_creation_proposal("mychannel", &signer).unwrap())
            .unwrap();

        let err = node
            .rules
            .apply(&channel_creation_proposal("mychannel", &signer).unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            AdmissionError::ChannelCommit(ChannelConfigError::ChannelExists(
                "mychannel".to_string()
            ))
        );
        assert_eq!(node.registrar.channels_count(), 1);
    }

    #[test]
    fn test_system_channel_id_cannot_be_recreated() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");

        let err = node
            .rules
            .apply(&channel_creation_proposal(SYSTEM_CHANNEL, &signer).unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), "ChannelCommit");
        assert_eq!(node.registrar.channels_count(), 0);
    }

    // =========================================================================
    // GATES
    // =========================================================================

    #[test]
    fn test_channel_limit() {
        let node = OrderingNode::new(2);
        let signer = LocalSigner::generate("SampleOrg");
        for id in ["c1", "c2"] {
            node.rules
                .apply(&channel_creation_proposal(id, &signer).unwrap())
                .unwrap();
        }

        let err = node
            .rules
            .apply(&channel_creation_proposal("c3", &signer).unwrap())
            .unwrap_err();
        assert_eq!(err, AdmissionError::TooManyChannels { count: 2, max: 2 });
        assert_eq!(node.registrar.channel_ids(), vec!["c1", "c2"]);
    }

    #[test]
    fn test_maintenance_window() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");

        node.system.set_consensus_state(ConsensusState::Maintenance);
        let err = node
            .rules
            .apply(&channel_creation_proposal("mychannel", &signer).unwrap())
            .unwrap_err();
        assert_eq!(err, AdmissionError::ChannelCreationForbidden);
        assert_eq!(node.registrar.channels_count(), 0);

        node.system.set_consensus_state(ConsensusState::Normal);
        node.rules
            .apply(&channel_creation_proposal("mychannel", &signer).unwrap())
            .unwrap();
        assert!(node.registrar.contains("mychannel"));
    }

    #[test]
    fn test_concurrent_proposals_respect_limit() {
        let node = OrderingNode::new(3);
        let signer = LocalSigner::generate("SampleOrg");
        let proposals: Vec<Envelope> = (0..8)
            .map(|i| channel_creation_proposal(&format!("c{i}"), &signer).unwrap())
            .collect();

        let rules = &node.rules;
        let results: Vec<Result<(), AdmissionError>> = std::thread::scope(|s| {
            let handles: Vec<_> = proposals
                .iter()
                .map(|p| s.spawn(move || rules.apply(p)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let admitted = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(admitted, 3);
        assert_eq!(node.registrar.channels_count(), 3);
        for err in results.into_iter().filter_map(Result::err) {
            assert!(
                matches!(
                    err,
                    AdmissionError::TooManyChannels { .. }
                        | AdmissionError::ChannelCommit(ChannelConfigError::CapacityExceeded {
                            max: 3
                        })
                ),
                "unexpected rejection: {err}"
            );
        }
    }

    // =========================================================================
    // MALFORMED PROPOSALS
    // =========================================================================

    #[test]
    fn test_empty_envelope_rejected_first() {
        let node = OrderingNode::new(0);
        let err = node.rules.apply(&Envelope::default()).unwrap_err();
        assert_eq!(err, AdmissionError::EmptyMessage);
    }

    #[test]
    fn test_tampered_config_is_mismatch() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");
        let update_tx = make_channel_creation_transaction(
            "mychannel",
            sample_write_set(),
            Some(&signer),
        )
        .unwrap();
        let config_tx = create_signed_envelope(
            HeaderType::Config,
            "mychannel",
            Some(&signer),
            &ConfigEnvelope {
                config: Some(Config::default()),
                last_update: Some(update_tx),
            },
            0,
            0,
        )
        .unwrap();
        let proposal = create_signed_envelope(
            HeaderType::OrdererTransaction,
            SYSTEM_CHANNEL,
            Some(&signer),
            &config_tx,
            0,
            0,
        )
        .unwrap();

        assert_eq!(
            node.rules.apply(&proposal).unwrap_err(),
            AdmissionError::ProposalMismatch
        );
        assert!(!node.registrar.contains("mychannel"));
    }

    #[test]
    fn test_regular_transaction_passes_through() {
        let node = OrderingNode::new(0);
        let signer = LocalSigner::generate("SampleOrg");
        let tx = create_signed_envelope(
            HeaderType::EndorserTransaction,
            SYSTEM_CHANNEL,
            Some(&signer),
            &b"payload".to_vec(),
            0,
            0,
        )
        .unwrap();

        assert_eq!(outer_class(&tx), MessageClass::Normal);
        node.rules.apply(&tx).unwrap();
        assert_eq!(node.registrar.channels_count(), 0);
    }
}
