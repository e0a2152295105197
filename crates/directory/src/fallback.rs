//! Static camera list served when the directory cannot be reached.
//!
//! Covers each transport the resolver distinguishes: FDOT cameras with and
//! without a stream, MJPEG-capable city cameras, snapshot-only feeds and a
//! bare HLS stream.

use videowall_core::camera::CameraRecord;

fn camera(id: &str, name: &str, stream_url: &str) -> CameraRecord {
    CameraRecord {
        id: id.to_string(),
        name: name.to_string(),
        stream_url: stream_url.to_string(),
        camera_type: None,
        jurisdiction: None,
        sector: None,
        status: Some("online".to_string()),
        fdot_id: None,
        supports_mjpeg: None,
        snapshot_url: None,
    }
}

/// The fallback dataset, in display order.
pub fn fallback_cameras() -> Vec<CameraRecord> {
    vec![
        CameraRecord {
            camera_type: Some("traffic".to_string()),
            jurisdiction: Some("FDOT".to_string()),
            sector: Some("north".to_string()),
            fdot_id: Some("1001".to_string()),
            ..camera("fdot-i4-exit-12", "I-4 @ Exit 12", "/streams/fdot/1001.mjpg")
        },
        CameraRecord {
            camera_type: Some("traffic".to_string()),
            jurisdiction: Some("FDOT".to_string()),
            sector: Some("south".to_string()),
            fdot_id: Some("1002".to_string()),
            ..camera("fdot-i75-mm-260", "I-75 @ MM 260", "")
        },
        CameraRecord {
            camera_type: Some("intersection".to_string()),
            jurisdiction: Some("City".to_string()),
            sector: Some("downtown".to_string()),
            supports_mjpeg: Some(true),
            ..camera("city-main-1st", "Main St & 1st Ave", "/streams/city/main-1st.mjpg")
        },
        CameraRecord {
            camera_type: Some("intersection".to_string()),
            jurisdiction: Some("City".to_string()),
            sector: Some("downtown".to_string()),
            snapshot_url: Some("/snapshots/city/harbor-bay.jpg".to_string()),
            ..camera("city-harbor-bay", "Harbor Blvd & Bay St", "")
        },
        CameraRecord {
            camera_type: Some("facility".to_string()),
            jurisdiction: Some("County".to_string()),
            sector: Some("east".to_string()),
            ..camera(
                "county-ops-lot",
                "County Ops Parking Lot",
                "/streams/county/ops-lot/index.m3u8",
            )
        },
        CameraRecord {
            camera_type: Some("facility".to_string()),
            jurisdiction: Some("County".to_string()),
            sector: Some("west".to_string()),
            status: Some("offline".to_string()),
            ..camera("county-water-plant", "Water Treatment Plant", "")
        },
    ]
}
