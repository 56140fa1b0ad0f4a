#![cfg_attr(not(feature = "kicad-ipc"), allow(dead_code))]

use crate::envelope;
use crate::error::PollerError;
use crate::proto::kiapi::board::types as board_types;

pub(crate) const FOOTPRINT_TYPE: &str = "kiapi.board.types.FootprintInstance";
pub(crate) const TRACK_TYPE: &str = "kiapi.board.types.Track";
pub(crate) const ARC_TYPE: &str = "kiapi.board.types.Arc";
pub(crate) const VIA_TYPE: &str = "kiapi.board.types.Via";
pub(crate) const ZONE_TYPE: &str = "kiapi.board.types.Zone";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Vector2Nm {
    pub x_nm: i64,
    pub y_nm: i64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BoardNet {
    pub code: i32,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardLayerInfo {
    pub id: i32,
    pub name: String,
}

impl BoardLayerInfo {
    /// Resolves a KiCad layer id to its canonical board name (`F.Cu`,
    /// `In2.Cu`, `Edge.Cuts`, ...).
    pub fn from_id(id: i32) -> Self {
        let name = board_types::BoardLayer::try_from(id)
            .map(|layer| canonical_layer_name(layer.as_str_name()))
            .unwrap_or_else(|_| format!("UNKNOWN_LAYER({id})"));

        Self { id, name }
    }

    pub fn front_copper() -> Self {
        Self::from_id(board_types::BoardLayer::BlFCu as i32)
    }

    pub fn back_copper() -> Self {
        Self::from_id(board_types::BoardLayer::BlBCu as i32)
    }
}

fn canonical_layer_name(proto_name: &str) -> String {
    proto_name
        .strip_prefix("BL_")
        .unwrap_or(proto_name)
        .replace('_', ".")
}

#[derive(Clone, Debug, PartialEq)]
pub struct PcbFootprint {
    pub reference: String,
    pub value: String,
    pub library_item_name: String,
    pub position: Vector2Nm,
    pub orientation_degrees: f64,
    /// Mirrored onto the back side of the board.
    pub flipped: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PcbTrack {
    pub net: BoardNet,
    pub start: Vector2Nm,
    pub end: Vector2Nm,
    pub width_nm: i64,
    pub layer: BoardLayerInfo,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PcbZone {
    pub name: String,
    pub net: BoardNet,
    pub layer: BoardLayerInfo,
}

/// The board as currently loaded in the editor, in host units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    pub footprints: Vec<PcbFootprint>,
    pub tracks: Vec<PcbTrack>,
    pub zones: Vec<PcbZone>,
}

impl Board {
    /// Builds a board from raw `GetItems` payloads, keeping the order KiCad
    /// returned them in. Straight segments, arcs and vias all land in
    /// `tracks`. Other payload types are skipped.
    pub(crate) fn from_items(items: &[prost_types::Any]) -> Result<Self, PollerError> {
        let mut board = Self::default();

        for item in items {
            if item.type_url == envelope::type_url(FOOTPRINT_TYPE) {
                let footprint = envelope::decode_any(item, FOOTPRINT_TYPE)?;
                board.footprints.push(footprint_from_proto(footprint));
            } else if item.type_url == envelope::type_url(TRACK_TYPE) {
                let track = envelope::decode_any(item, TRACK_TYPE)?;
                board.tracks.push(track_from_proto(track));
            } else if item.type_url == envelope::type_url(ARC_TYPE) {
                let arc = envelope::decode_any(item, ARC_TYPE)?;
                board.tracks.push(arc_from_proto(arc));
            } else if item.type_url == envelope::type_url(VIA_TYPE) {
                let via = envelope::decode_any(item, VIA_TYPE)?;
                board.tracks.push(via_from_proto(via));
            } else if item.type_url == envelope::type_url(ZONE_TYPE) {
                let zone = envelope::decode_any(item, ZONE_TYPE)?;
                board.zones.push(zone_from_proto(zone));
            }
        }

        Ok(board)
    }
}

fn field_text(field: Option<&board_types::Field>) -> String {
    field
        .and_then(|field| field.text.as_ref())
        .and_then(|board_text| board_text.text.as_ref())
        .map(|text| text.text.clone())
        .unwrap_or_default()
}

fn vector_from_proto(
    vector: Option<crate::proto::kiapi::common::types::Vector2>,
) -> Vector2Nm {
    vector.map_or_else(Vector2Nm::default, |v| Vector2Nm {
        x_nm: v.x_nm,
        y_nm: v.y_nm,
    })
}

fn net_from_proto(net: Option<board_types::Net>) -> BoardNet {
    net.map_or_else(BoardNet::default, |net| BoardNet {
        code: net.code.map_or(0, |code| code.value),
        name: net.name,
    })
}

fn footprint_from_proto(footprint: board_types::FootprintInstance) -> PcbFootprint {
    let library_item_name = footprint
        .definition
        .as_ref()
        .and_then(|definition| definition.id.as_ref())
        .map(|id| id.entry_name.clone())
        .unwrap_or_default();

    PcbFootprint {
        reference: field_text(footprint.reference_field.as_ref()),
        value: field_text(footprint.value_field.as_ref()),
        library_item_name,
        position: vector_from_proto(footprint.position),
        orientation_degrees: footprint
            .orientation
            .map_or(0.0, |angle| angle.value_degrees),
        flipped: footprint.layer == board_types::BoardLayer::BlBCu as i32,
    }
}

fn track_from_proto(track: board_types::Track) -> PcbTrack {
    PcbTrack {
        net: net_from_proto(track.net),
        start: vector_from_proto(track.start),
        end: vector_from_proto(track.end),
        width_nm: track.width.map_or(0, |width| width.value_nm),
        layer: BoardLayerInfo::from_id(track.layer),
    }
}

fn arc_from_proto(arc: board_types::Arc) -> PcbTrack {
    PcbTrack {
        net: net_from_proto(arc.net),
        start: vector_from_proto(arc.start),
        end: vector_from_proto(arc.end),
        width_nm: arc.width.map_or(0, |width| width.value_nm),
        layer: BoardLayerInfo::from_id(arc.layer),
    }
}

/// A via is a zero-length track: its position is both ends, its pad
/// diameter the width, and its top copper layer the layer.
fn via_from_proto(via: board_types::Via) -> PcbTrack {
    let position = vector_from_proto(via.position);
    let pad_stack = via.pad_stack.unwrap_or_default();

    let width_nm = pad_stack
        .copper_layers
        .first()
        .and_then(|layer| layer.size.as_ref())
        .map_or(0, |size| size.x_nm);
    let layer = pad_stack
        .drill
        .as_ref()
        .map(|drill| drill.start_layer)
        .filter(|layer| *layer != board_types::BoardLayer::BlUnknown as i32)
        .or_else(|| pad_stack.layers.first().copied())
        .unwrap_or(board_types::BoardLayer::BlUndefined as i32);

    PcbTrack {
        net: net_from_proto(via.net),
        start: position,
        end: position,
        width_nm,
        layer: BoardLayerInfo::from_id(layer),
    }
}

fn zone_from_proto(zone: board_types::Zone) -> PcbZone {
    let layer = zone
        .layers
        .first()
        .copied()
        .unwrap_or(board_types::BoardLayer::BlUndefined as i32);

    PcbZone {
        name: zone.name,
        net: net_from_proto(zone.copper_settings.and_then(|settings| settings.net)),
        layer: BoardLayerInfo::from_id(layer),
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::{
        Board, BoardLayerInfo, BoardNet, Vector2Nm, ARC_TYPE, FOOTPRINT_TYPE, TRACK_TYPE, VIA_TYPE,
        ZONE_TYPE,
    };
    use crate::envelope;
    use crate::error::PollerError;
    use crate::proto::kiapi::board::types as board_types;
    use crate::proto::kiapi::common::types as common_types;

    fn any_of<T: Message>(message: &T, type_name: &str) -> prost_types::Any {
        envelope::pack_any(message, type_name)
    }

    fn field(text: &str) -> board_types::Field {
        board_types::Field {
            id: None,
            name: String::new(),
            text: Some(board_types::BoardText {
                id: None,
                text: Some(common_types::Text {
                    position: None,
                    text: text.to_string(),
                    hyperlink: String::new(),
                }),
                layer: 0,
                knockout: false,
                locked: 0,
            }),
            visible: true,
        }
    }

    fn footprint(reference: &str, layer: board_types::BoardLayer) -> board_types::FootprintInstance {
        board_types::FootprintInstance {
            id: None,
            position: Some(common_types::Vector2 {
                x_nm: 10_000_000,
                y_nm: 5_000_000,
            }),
            orientation: Some(common_types::Angle {
                value_degrees: 90.0,
            }),
            layer: layer as i32,
            locked: 0,
            definition: Some(board_types::Footprint {
                id: Some(common_types::LibraryIdentifier {
                    library_nickname: "Resistor_SMD".to_string(),
                    entry_name: "R_0603_1608Metric".to_string(),
                }),
            }),
            reference_field: Some(field(reference)),
            value_field: Some(field("10k")),
        }
    }

    #[test]
    fn layer_names_follow_board_conventions() {
        assert_eq!(BoardLayerInfo::front_copper().name, "F.Cu");
        assert_eq!(BoardLayerInfo::back_copper().name, "B.Cu");
        assert_eq!(
            BoardLayerInfo::from_id(board_types::BoardLayer::BlIn2Cu as i32).name,
            "In2.Cu"
        );
        assert_eq!(
            BoardLayerInfo::from_id(board_types::BoardLayer::BlEdgeCuts as i32).name,
            "Edge.Cuts"
        );
        assert_eq!(
            BoardLayerInfo::from_id(board_types::BoardLayer::BlUser1 as i32).name,
            "User.1"
        );
    }

    #[test]
    fn layer_name_formats_unknown_id() {
        let layer = BoardLayerInfo::from_id(999);
        assert_eq!(layer.name, "UNKNOWN_LAYER(999)");
        assert_eq!(layer.id, 999);
    }

    #[test]
    fn from_items_decodes_footprint_fields() {
        let items = vec![any_of(
            &footprint("R1", board_types::BoardLayer::BlFCu),
            FOOTPRINT_TYPE,
        )];

        let board = Board::from_items(&items).expect("footprint should decode");
        assert_eq!(board.footprints.len(), 1);
        let fp = &board.footprints[0];
        assert_eq!(fp.reference, "R1");
        assert_eq!(fp.value, "10k");
        assert_eq!(fp.library_item_name, "R_0603_1608Metric");
        assert_eq!(
            fp.position,
            Vector2Nm {
                x_nm: 10_000_000,
                y_nm: 5_000_000
            }
        );
        assert_eq!(fp.orientation_degrees, 90.0);
        assert!(!fp.flipped);
    }

    #[test]
    fn from_items_marks_back_side_footprints_flipped() {
        let items = vec![any_of(
            &footprint("U7", board_types::BoardLayer::BlBCu),
            FOOTPRINT_TYPE,
        )];

        let board = Board::from_items(&items).expect("footprint should decode");
        assert!(board.footprints[0].flipped);
    }

    #[test]
    fn from_items_decodes_tracks_and_zones_in_order() {
        let track = board_types::Track {
            id: None,
            start: Some(common_types::Vector2 { x_nm: 1, y_nm: 2 }),
            end: Some(common_types::Vector2 { x_nm: 3, y_nm: 4 }),
            width: Some(common_types::Distance { value_nm: 250_000 }),
            locked: 0,
            layer: board_types::BoardLayer::BlBCu as i32,
            net: Some(board_types::Net {
                code: Some(board_types::NetCode { value: 12 }),
                name: "GND".to_string(),
            }),
        };
        let zone = board_types::Zone {
            id: None,
            r#type: 1,
            layers: vec![
                board_types::BoardLayer::BlIn1Cu as i32,
                board_types::BoardLayer::BlIn2Cu as i32,
            ],
            name: "pour".to_string(),
            copper_settings: Some(board_types::CopperZoneSettings {
                net: Some(board_types::Net {
                    code: Some(board_types::NetCode { value: 3 }),
                    name: "+3V3".to_string(),
                }),
            }),
        };
        let second_track = board_types::Track {
            net: None,
            ..track.clone()
        };

        let items = vec![
            any_of(&track, TRACK_TYPE),
            any_of(&zone, ZONE_TYPE),
            any_of(&second_track, TRACK_TYPE),
        ];

        let board = Board::from_items(&items).expect("items should decode");
        assert_eq!(board.tracks.len(), 2);
        assert_eq!(
            board.tracks[0].net,
            BoardNet {
                code: 12,
                name: "GND".to_string()
            }
        );
        assert_eq!(board.tracks[0].width_nm, 250_000);
        assert_eq!(board.tracks[0].layer.name, "B.Cu");
        assert_eq!(board.tracks[1].net, BoardNet::default());

        assert_eq!(board.zones.len(), 1);
        assert_eq!(board.zones[0].net.name, "+3V3");
        assert_eq!(board.zones[0].layer.name, "In1.Cu");
    }

    #[test]
    fn from_items_handles_zone_without_copper_settings() {
        let rule_area = board_types::Zone {
            id: None,
            r#type: 2,
            layers: Vec::new(),
            name: "keepout".to_string(),
            copper_settings: None,
        };

        let board = Board::from_items(&[any_of(&rule_area, ZONE_TYPE)])
            .expect("rule area should decode");
        assert_eq!(board.zones[0].net.name, "");
        assert_eq!(board.zones[0].layer.name, "UNDEFINED");
    }

    fn gnd() -> Option<board_types::Net> {
        Some(board_types::Net {
            code: Some(board_types::NetCode { value: 1 }),
            name: "GND".to_string(),
        })
    }

    #[test]
    fn from_items_keeps_segments_arcs_and_vias_in_host_order() {
        let segment = board_types::Track {
            id: None,
            start: Some(common_types::Vector2 { x_nm: 0, y_nm: 0 }),
            end: Some(common_types::Vector2 { x_nm: 1_000_000, y_nm: 0 }),
            width: Some(common_types::Distance { value_nm: 200_000 }),
            locked: 0,
            layer: board_types::BoardLayer::BlFCu as i32,
            net: gnd(),
        };
        let arc = board_types::Arc {
            id: None,
            start: Some(common_types::Vector2 { x_nm: 1_000_000, y_nm: 0 }),
            mid: Some(common_types::Vector2 { x_nm: 1_500_000, y_nm: 500_000 }),
            end: Some(common_types::Vector2 { x_nm: 2_000_000, y_nm: 1_000_000 }),
            width: Some(common_types::Distance { value_nm: 300_000 }),
            locked: 0,
            layer: board_types::BoardLayer::BlBCu as i32,
            net: gnd(),
        };
        let via = board_types::Via {
            id: None,
            position: Some(common_types::Vector2 {
                x_nm: 2_000_000,
                y_nm: 1_000_000,
            }),
            pad_stack: Some(board_types::PadStack {
                r#type: 1,
                layers: vec![
                    board_types::BoardLayer::BlFCu as i32,
                    board_types::BoardLayer::BlBCu as i32,
                ],
                drill: Some(board_types::DrillProperties {
                    start_layer: board_types::BoardLayer::BlFCu as i32,
                    end_layer: board_types::BoardLayer::BlBCu as i32,
                    diameter: Some(common_types::Vector2 {
                        x_nm: 300_000,
                        y_nm: 300_000,
                    }),
                }),
                copper_layers: vec![board_types::PadStackLayer {
                    layer: board_types::BoardLayer::BlFCu as i32,
                    size: Some(common_types::Vector2 {
                        x_nm: 600_000,
                        y_nm: 600_000,
                    }),
                }],
            }),
            locked: 0,
            net: gnd(),
            r#type: 1,
        };

        let items = vec![
            any_of(&segment, TRACK_TYPE),
            any_of(&arc, ARC_TYPE),
            any_of(&via, VIA_TYPE),
        ];

        let board = Board::from_items(&items).expect("routing should decode");
        assert_eq!(board.tracks.len(), 3);

        assert_eq!(board.tracks[0].width_nm, 200_000);
        assert_eq!(board.tracks[0].layer.name, "F.Cu");

        let arc = &board.tracks[1];
        assert_eq!(arc.start, Vector2Nm { x_nm: 1_000_000, y_nm: 0 });
        assert_eq!(
            arc.end,
            Vector2Nm {
                x_nm: 2_000_000,
                y_nm: 1_000_000
            }
        );
        assert_eq!(arc.width_nm, 300_000);
        assert_eq!(arc.layer.name, "B.Cu");
        assert_eq!(arc.net.name, "GND");

        let via = &board.tracks[2];
        assert_eq!(via.start, via.end);
        assert_eq!(
            via.start,
            Vector2Nm {
                x_nm: 2_000_000,
                y_nm: 1_000_000
            }
        );
        assert_eq!(via.width_nm, 600_000);
        assert_eq!(via.layer.name, "F.Cu");
        assert_eq!(via.net.name, "GND");
    }

    #[test]
    fn via_without_pad_stack_still_counts_as_a_track() {
        let via = board_types::Via {
            id: None,
            position: Some(common_types::Vector2 { x_nm: 5, y_nm: 7 }),
            pad_stack: None,
            locked: 0,
            net: None,
            r#type: 0,
        };

        let board = Board::from_items(&[any_of(&via, VIA_TYPE)]).expect("via should decode");
        assert_eq!(board.tracks.len(), 1);
        assert_eq!(board.tracks[0].width_nm, 0);
        assert_eq!(board.tracks[0].layer.name, "UNDEFINED");
    }

    #[test]
    fn from_items_skips_unrelated_payloads() {
        let items = vec![prost_types::Any {
            type_url: envelope::type_url("kiapi.board.types.Pad"),
            value: vec![1, 2, 3],
        }];

        let board = Board::from_items(&items).expect("unrelated items are ignored");
        assert_eq!(board, Board::default());
    }

    #[test]
    fn from_items_reports_corrupt_payloads() {
        let items = vec![prost_types::Any {
            type_url: envelope::type_url(TRACK_TYPE),
            value: vec![0xff, 0xff, 0xff],
        }];

        let result = Board::from_items(&items);
        assert!(matches!(result, Err(PollerError::ProtobufDecode(_))));
    }
}
