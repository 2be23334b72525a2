//! Catalog data sources.

/// Static host serving the per-category JSON exports.
const REMOTE_BASE: &str =
    "https://raw.githubusercontent.com/SujeethSoma/hinch-catalogs-web/main/catalogue_json";

/// Per-category documents that make up the remote catalog.
pub const CATEGORY_FILES: &[&str] = &[
    "360_Louvers.json",
    "Acrylic_Laminates.json",
    "Decorative_Laminates.json",
    "Doors.json",
    "Edge_Banding.json",
    "Hardware.json",
    "Liners.json",
    "Louvers.json",
    "Moulders.json",
    "PVC_Laminates.json",
    "Solid_Colour_Laminates.json",
    "Thermo_Laminates.json",
    "Ti_Patti.json",
    "Veeners.json",
    "Wall_Panels.json",
];

pub fn remote_url(file: &str) -> String {
    format!("{REMOTE_BASE}/{file}")
}

/// Development catalog compiled into the bundle, in the spreadsheet-export
/// schema so it exercises the same normalizer path as the remote data.
pub const BUNDLED_CATALOG: &str = include_str!("../../assets/catalogs.json");
