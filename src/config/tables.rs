//! Fixed configuration the dashboard views render directly. Real-time Drive
//! folder listing would require authentication, so these tables are
//! maintained by hand and treated as read-only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub folder_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFolder {
    pub id: &'static str,
    pub name: &'static str,
    pub folder_id: &'static str,
    pub subfolders: &'static [DocumentFolder],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayer {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomMap {
    pub id: &'static str,
    pub name: &'static str,
    pub src: &'static str,
}

const GALLERY_FOLDER: &str = "1O1WlCjMvZ5lVcrOIGNMlBY4ZuQ-zEarg";

pub const GALLERY_CATEGORIES: &[GalleryCategory] = &[
    GalleryCategory {
        id: "accident-response",
        name: "Accident Response",
        description: "Responders assisting victims and securing the scene.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "awareness-seminar",
        name: "Awareness Seminar",
        description: "Educational sessions and training programs.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "bls-first-aid",
        name: "BLS/First Aid",
        description: "Basic Life Support and First Aid training.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "clearing-operations",
        name: "Clearing Operations",
        description: "Road and area clearing activities.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "coastal-cleanup",
        name: "Coastal Cleanup",
        description: "Beach and coastal area cleanup efforts.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "community-cleanup",
        name: "Community Cleanup",
        description: "Community-wide cleanup initiatives.",
        folder_id: GALLERY_FOLDER,
    },
    GalleryCategory {
        id: "damage-assessment",
        name: "Damage Assessment",
        description: "Post-incident damage evaluation.",
        folder_id: GALLERY_FOLDER,
    },
];

const DOCUMENTS_FOLDER: &str = "15_xiFeXu_vdIe2CYrjGaRCAho2OqhGvo";

pub const DOCUMENT_FOLDERS: &[DocumentFolder] = &[DocumentFolder {
    id: "root",
    name: "MDRRMO Documents",
    folder_id: DOCUMENTS_FOLDER,
    subfolders: &[
        DocumentFolder {
            id: "plans",
            name: "Emergency Plans",
            folder_id: DOCUMENTS_FOLDER,
            subfolders: &[],
        },
        DocumentFolder {
            id: "reports",
            name: "Reports",
            folder_id: DOCUMENTS_FOLDER,
            subfolders: &[],
        },
        DocumentFolder {
            id: "policies",
            name: "Policies",
            folder_id: DOCUMENTS_FOLDER,
            subfolders: &[],
        },
        DocumentFolder {
            id: "training",
            name: "Training Materials",
            folder_id: DOCUMENTS_FOLDER,
            subfolders: &[],
        },
    ],
}];

pub const MAP_LAYERS: &[MapLayer] = &[
    MapLayer {
        id: "interactive",
        name: "Interactive Map",
        icon: "🗺️",
        active: true,
    },
    MapLayer {
        id: "administrative",
        name: "Administrative Map",
        icon: "🏛️",
        active: false,
    },
    MapLayer {
        id: "topographic",
        name: "Topographic Map",
        icon: "⛰️",
        active: false,
    },
    MapLayer {
        id: "land-use",
        name: "Land Use Map",
        icon: "🌍",
        active: false,
    },
    MapLayer {
        id: "hazards",
        name: "Hazards Maps",
        icon: "⚠️",
        active: false,
    },
    MapLayer {
        id: "other",
        name: "Other Maps",
        icon: "📍",
        active: false,
    },
    MapLayer {
        id: "google-maps",
        name: "Google Open Map",
        icon: "🔗",
        active: false,
    },
];

pub const CUSTOM_MAPS: &[CustomMap] = &[
    CustomMap {
        id: "map-1",
        name: "Municipality Overview",
        src: "https://www.google.com/maps/d/embed?mid=1mjXfpYAmLEhG2U2Gu9VWjRdcuI9H4kw&ehbc=2E312F",
    },
    CustomMap {
        id: "map-2",
        name: "Disaster Zones",
        src: "https://www.google.com/maps/d/embed?mid=17JUWx271jjwJNBN2yVStmAPY_Y_iQOg&ehbc=2E312F",
    },
    CustomMap {
        id: "map-3",
        name: "Emergency Response Routes",
        src: "https://www.google.com/maps/d/embed?mid=1WqlvA465RCv29U-MyWi-1qU1MljXgAU&ehbc=2E312F",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_ids_are_unique() {
        let gallery: HashSet<&str> = GALLERY_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(gallery.len(), GALLERY_CATEGORIES.len());

        let layers: HashSet<&str> = MAP_LAYERS.iter().map(|l| l.id).collect();
        assert_eq!(layers.len(), MAP_LAYERS.len());

        let maps: HashSet<&str> = CUSTOM_MAPS.iter().map(|m| m.id).collect();
        assert_eq!(maps.len(), CUSTOM_MAPS.len());
    }

    #[test]
    fn test_exactly_one_default_map_layer() {
        let active = MAP_LAYERS.iter().filter(|l| l.active).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_document_root_has_subfolders() {
        let root = DOCUMENT_FOLDERS.iter().find(|f| f.id == "root").unwrap();
        assert_eq!(root.subfolders.len(), 4);
    }
}
