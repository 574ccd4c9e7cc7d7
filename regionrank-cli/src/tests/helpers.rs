//! Test helpers for writing datasets and requests to a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Scratch directory holding a small Seoul dataset.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_dataset(&self) -> Utf8PathBuf {
        let path = self.path("regions.geojson");
        let payload = serde_json::to_vec_pretty(&dataset()).expect("serialise dataset");
        write_utf8(&path, &payload);
        path
    }

    pub(super) fn write_request(&self, request: &Value) -> Utf8PathBuf {
        let path = self.path("request.json");
        let payload = serde_json::to_vec_pretty(request).expect("serialise request");
        write_utf8(&path, &payload);
        path
    }
}

fn feature(name: &str, lon: f64, lat: f64, transport: u32, rent: f64) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [lon, lat],
                [lon + 0.01, lat],
                [lon + 0.01, lat + 0.01],
                [lon, lat + 0.01],
                [lon, lat]
            ]]
        },
        "properties": {
            "ADM_NM": name,
            "2023년_계_총세대수": 1500,
            "count_transport": transport,
            "sum_all_shop": "1,200",
            "아파트 단위면적당 월세금": rent,
            "아파트 월세 단위면적당 보증금": 300.0,
            "아파트 전세 단위면적당 보증금": 2500.0
        }
    })
}

pub(super) fn dataset() -> Value {
    json!({
        "type": "FeatureCollection",
        "name": "seoul_regions",
        "features": [
            feature("서울특별시 종로구 청운효자동", 126.96, 37.58, 4, 2.0),
            feature("서울특별시 종로구 사직동", 126.97, 37.57, 12, 2.5),
            feature("서울특별시 강남구 역삼1동", 127.03, 37.49, 30, 4.0)
        ]
    })
}

pub(super) fn request() -> Value {
    json!({
        "currentWorkplaceSido": "서울특별시",
        "currentWorkplaceSigungu": "종로구",
        "currentWorkplaceEupmyeondong": "청운효자동",
        "transportation": 10,
        "rentPrice": 2,
        "area": 20,
        "maxPrice": 100
    })
}
