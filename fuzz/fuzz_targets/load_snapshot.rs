#![no_main]

use libfuzzer_sys::fuzz_target;
use waypost_core::RoadNetwork;
use waypost_core::snapshot::NetworkSnapshot;

fuzz_target!(|data: &[u8]| {
    let Ok(snapshot) = serde_json::from_slice::<NetworkSnapshot>(data) else {
        return;
    };
    let Ok(network) = RoadNetwork::from_snapshot(snapshot, 5.0) else {
        return;
    };

    // Anything accepted once must be accepted again after export.
    let exported = network.snapshot();
    let reloaded = RoadNetwork::from_snapshot(exported.clone(), 5.0)
        .expect("exported snapshot must reload");
    assert_eq!(reloaded.snapshot(), exported);
});
