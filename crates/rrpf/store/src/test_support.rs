use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use rrpf_types::{Digest, Provenance, QueryStats, RequestId, Response};
use serde_json::json;

pub(crate) fn digest(seed: u8) -> Digest {
    Digest::new(format!("{:02x}", seed).repeat(32))
}

pub(crate) fn response(inputs_digest: &Digest) -> Response {
    let mut data = BTreeMap::new();
    data.insert(
        "table:t1".to_string(),
        json!({"rows": [{"id": 0, "label": "naïve"}, {"id": 1, "label": null}]}),
    );
    let mut query_stats = BTreeMap::new();
    query_stats.insert("table:t1".to_string(), QueryStats::new(2, 1));
    Response {
        ok: true,
        request_id: RequestId::new("req-store"),
        as_of: "latest".into(),
        data,
        partial: false,
        errors: Vec::new(),
        provenance: Provenance {
            fulfilled_at: Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap()
                + Duration::microseconds(123_456),
            inputs_digest: inputs_digest.clone(),
            query_stats,
        },
    }
}

