//! # Ordering Service Benchmarks
//!
//! | Path | Operation |
//! |------|-----------|
//! | qc-18 Channel Admission | Full rule set over a creation proposal |
//! | qc-18 Channel Admission | Pass-through of a regular transaction |
//! | qc-19 Block Delivery | Seek request build and sign |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use qc_18_channel_admission::Rule;
use qc_19_block_delivery::{BlocksRequester, LedgerHeightTracker, MpscDeliverer, StaticCredentials};
use qc_tests::fixtures::{channel_creation_proposal, OrderingNode, SYSTEM_CHANNEL};
use shared_crypto::LocalSigner;
use shared_types::{create_signed_envelope, HeaderType};

// ============================================================================
// QC-18: Channel Admission
// ============================================================================

fn bench_channel_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-channel-admission");
    group.measurement_time(Duration::from_secs(10));

    let signer = LocalSigner::generate("SampleOrg");
    let proposal = channel_creation_proposal("bench", &signer).expect("proposal");

    group.bench_function("create_channel", |b| {
        b.iter_batched(
            || OrderingNode::new(0),
            |node| black_box(node.rules.apply(&proposal).is_ok()),
            BatchSize::SmallInput,
        )
    });

    let node = OrderingNode::new(0);
    for size in [64usize, 4096, 65536] {
        let tx = create_signed_envelope(
            HeaderType::EndorserTransaction,
            SYSTEM_CHANNEL,
            Some(&signer),
            &vec![0u8; size],
            0,
            0,
        )
        .expect("transaction");
        group.bench_with_input(BenchmarkId::new("pass_through", size), &tx, |b, tx| {
            b.iter(|| black_box(node.rules.apply(tx).is_ok()))
        });
    }

    group.finish();
}

// ============================================================================
// QC-19: Block Delivery
// ============================================================================

fn bench_seek_request(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let (client, mut rx) = MpscDeliverer::channel(1);
    let requester = BlocksRequester::new(
        false,
        "mychannel",
        Arc::new(client),
        Arc::new(LocalSigner::generate("Org1MSP")),
        Arc::new(StaticCredentials::empty()),
    );
    let ledger = LedgerHeightTracker::new(1_000);

    c.bench_function("qc-19-seek-request", |b| {
        b.iter(|| {
            runtime.block_on(async {
                requester.request_blocks(&ledger).await.expect("send");
                black_box(rx.recv().await)
            })
        })
    });
}

criterion_group!(benches, bench_channel_admission, bench_seek_request);
criterion_main!(benches);
