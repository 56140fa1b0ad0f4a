//! Subset of the KiCad IPC API protobuf schema (`kiapi.*`) needed to locate
//! the open board and read its footprints, tracks and zones.
//!
//! Field numbers follow the upstream `.proto` files. Fields this crate never
//! reads are left out; prost skips unknown fields when decoding.

pub(crate) mod kiapi {
    #[allow(dead_code)]
    pub mod common {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ApiRequestHeader {
            #[prost(string, tag = "1")]
            pub kicad_token: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub client_name: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ApiRequest {
            #[prost(message, optional, tag = "1")]
            pub header: ::core::option::Option<ApiRequestHeader>,
            #[prost(message, optional, tag = "2")]
            pub message: ::core::option::Option<::prost_types::Any>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ApiResponseHeader {
            #[prost(string, tag = "1")]
            pub kicad_token: ::prost::alloc::string::String,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ApiResponse {
            #[prost(message, optional, tag = "1")]
            pub header: ::core::option::Option<ApiResponseHeader>,
            #[prost(message, optional, tag = "2")]
            pub status: ::core::option::Option<ApiResponseStatus>,
            #[prost(message, optional, tag = "3")]
            pub message: ::core::option::Option<::prost_types::Any>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ApiResponseStatus {
            #[prost(enumeration = "ApiStatusCode", tag = "1")]
            pub status: i32,
            #[prost(string, tag = "2")]
            pub error_message: ::prost::alloc::string::String,
        }

        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum ApiStatusCode {
            AsUnknown = 0,
            AsOk = 1,
            AsTimeout = 2,
            AsBadRequest = 3,
            AsNotReady = 4,
            AsUnhandled = 5,
            AsTokenMismatch = 6,
            AsBusy = 7,
            AsUnimplemented = 8,
        }

        impl ApiStatusCode {
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Self::AsUnknown => "AS_UNKNOWN",
                    Self::AsOk => "AS_OK",
                    Self::AsTimeout => "AS_TIMEOUT",
                    Self::AsBadRequest => "AS_BAD_REQUEST",
                    Self::AsNotReady => "AS_NOT_READY",
                    Self::AsUnhandled => "AS_UNHANDLED",
                    Self::AsTokenMismatch => "AS_TOKEN_MISMATCH",
                    Self::AsBusy => "AS_BUSY",
                    Self::AsUnimplemented => "AS_UNIMPLEMENTED",
                }
            }
        }

        pub mod commands {
            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct GetVersion {}

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetVersionResponse {
                #[prost(message, optional, tag = "1")]
                pub version: ::core::option::Option<super::types::KiCadVersion>,
            }

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct GetOpenDocuments {
                #[prost(enumeration = "super::types::DocumentType", tag = "1")]
                pub r#type: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetOpenDocumentsResponse {
                #[prost(message, repeated, tag = "1")]
                pub documents: ::prost::alloc::vec::Vec<super::types::DocumentSpecifier>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetItems {
                #[prost(message, optional, tag = "1")]
                pub header: ::core::option::Option<super::types::ItemHeader>,
                #[prost(enumeration = "super::types::KiCadObjectType", repeated, tag = "2")]
                pub types: ::prost::alloc::vec::Vec<i32>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetItemsResponse {
                #[prost(message, optional, tag = "1")]
                pub header: ::core::option::Option<super::types::ItemHeader>,
                #[prost(enumeration = "super::types::ItemRequestStatus", tag = "2")]
                pub status: i32,
                #[prost(message, repeated, tag = "3")]
                pub items: ::prost::alloc::vec::Vec<::prost_types::Any>,
            }
        }

        pub mod types {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct KiCadVersion {
                #[prost(uint32, tag = "1")]
                pub major: u32,
                #[prost(uint32, tag = "2")]
                pub minor: u32,
                #[prost(uint32, tag = "3")]
                pub patch: u32,
                #[prost(string, tag = "4")]
                pub full_version: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Kiid {
                #[prost(string, tag = "1")]
                pub value: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct LibraryIdentifier {
                #[prost(string, tag = "1")]
                pub library_nickname: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub entry_name: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SheetPath {
                #[prost(message, repeated, tag = "1")]
                pub path: ::prost::alloc::vec::Vec<Kiid>,
                #[prost(string, tag = "2")]
                pub path_human_readable: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ProjectSpecifier {
                #[prost(string, tag = "1")]
                pub name: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub path: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DocumentSpecifier {
                #[prost(enumeration = "DocumentType", tag = "1")]
                pub r#type: i32,
                #[prost(message, optional, tag = "5")]
                pub project: ::core::option::Option<ProjectSpecifier>,
                #[prost(oneof = "document_specifier::Identifier", tags = "2, 3, 4")]
                pub identifier: ::core::option::Option<document_specifier::Identifier>,
            }

            pub mod document_specifier {
                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Identifier {
                    #[prost(message, tag = "2")]
                    LibId(super::LibraryIdentifier),
                    #[prost(message, tag = "3")]
                    SheetPath(super::SheetPath),
                    #[prost(string, tag = "4")]
                    BoardFilename(::prost::alloc::string::String),
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ItemHeader {
                #[prost(message, optional, tag = "1")]
                pub document: ::core::option::Option<DocumentSpecifier>,
                #[prost(message, optional, tag = "2")]
                pub container: ::core::option::Option<Kiid>,
                #[prost(message, optional, tag = "3")]
                pub field_mask: ::core::option::Option<::prost_types::FieldMask>,
            }

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct Vector2 {
                #[prost(int64, tag = "1")]
                pub x_nm: i64,
                #[prost(int64, tag = "2")]
                pub y_nm: i64,
            }

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct Distance {
                #[prost(int64, tag = "1")]
                pub value_nm: i64,
            }

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct Angle {
                #[prost(double, tag = "1")]
                pub value_degrees: f64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Text {
                #[prost(message, optional, tag = "1")]
                pub position: ::core::option::Option<Vector2>,
                #[prost(string, tag = "3")]
                pub text: ::prost::alloc::string::String,
                #[prost(string, tag = "4")]
                pub hyperlink: ::prost::alloc::string::String,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum DocumentType {
                DoctypeUnknown = 0,
                DoctypeSchematic = 1,
                DoctypeSymbol = 2,
                DoctypePcb = 3,
                DoctypeFootprint = 4,
                DoctypeDrawingSheet = 5,
                DoctypeProject = 6,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum ItemRequestStatus {
                IrsUnknown = 0,
                IrsOk = 1,
                IrsDocumentNotFound = 2,
                IrsFieldMaskInvalid = 3,
            }

            impl ItemRequestStatus {
                pub fn as_str_name(&self) -> &'static str {
                    match self {
                        Self::IrsUnknown => "IRS_UNKNOWN",
                        Self::IrsOk => "IRS_OK",
                        Self::IrsDocumentNotFound => "IRS_DOCUMENT_NOT_FOUND",
                        Self::IrsFieldMaskInvalid => "IRS_FIELD_MASK_INVALID",
                    }
                }
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum KiCadObjectType {
                KotUnknown = 0,
                KotPcbFootprint = 1,
                KotPcbPad = 2,
                KotPcbShape = 3,
                KotPcbReferenceImage = 4,
                KotPcbField = 5,
                KotPcbGenerator = 6,
                KotPcbText = 7,
                KotPcbTextbox = 8,
                KotPcbTable = 9,
                KotPcbTablecell = 10,
                KotPcbTrace = 11,
                KotPcbVia = 12,
                KotPcbArc = 13,
                KotPcbMarker = 14,
                KotPcbDimension = 15,
                KotPcbZone = 16,
                KotPcbGroup = 17,
            }
        }
    }

    #[allow(dead_code)]
    pub mod board {
        pub mod types {
            use super::super::common::types as common_types;

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct NetCode {
                #[prost(int32, tag = "1")]
                pub value: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Net {
                #[prost(message, optional, tag = "1")]
                pub code: ::core::option::Option<NetCode>,
                #[prost(string, tag = "2")]
                pub name: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Track {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(message, optional, tag = "2")]
                pub start: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "3")]
                pub end: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "4")]
                pub width: ::core::option::Option<common_types::Distance>,
                #[prost(int32, tag = "5")]
                pub locked: i32,
                #[prost(enumeration = "BoardLayer", tag = "6")]
                pub layer: i32,
                #[prost(message, optional, tag = "7")]
                pub net: ::core::option::Option<Net>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Arc {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(message, optional, tag = "2")]
                pub start: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "3")]
                pub mid: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "4")]
                pub end: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "5")]
                pub width: ::core::option::Option<common_types::Distance>,
                #[prost(int32, tag = "6")]
                pub locked: i32,
                #[prost(enumeration = "BoardLayer", tag = "7")]
                pub layer: i32,
                #[prost(message, optional, tag = "8")]
                pub net: ::core::option::Option<Net>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DrillProperties {
                #[prost(enumeration = "BoardLayer", tag = "1")]
                pub start_layer: i32,
                #[prost(enumeration = "BoardLayer", tag = "2")]
                pub end_layer: i32,
                #[prost(message, optional, tag = "3")]
                pub diameter: ::core::option::Option<common_types::Vector2>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PadStackLayer {
                #[prost(enumeration = "BoardLayer", tag = "1")]
                pub layer: i32,
                #[prost(message, optional, tag = "3")]
                pub size: ::core::option::Option<common_types::Vector2>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PadStack {
                #[prost(int32, tag = "1")]
                pub r#type: i32,
                #[prost(enumeration = "BoardLayer", repeated, tag = "2")]
                pub layers: ::prost::alloc::vec::Vec<i32>,
                #[prost(message, optional, tag = "3")]
                pub drill: ::core::option::Option<DrillProperties>,
                #[prost(message, repeated, tag = "5")]
                pub copper_layers: ::prost::alloc::vec::Vec<PadStackLayer>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Via {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(message, optional, tag = "2")]
                pub position: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "3")]
                pub pad_stack: ::core::option::Option<PadStack>,
                #[prost(int32, tag = "4")]
                pub locked: i32,
                #[prost(message, optional, tag = "5")]
                pub net: ::core::option::Option<Net>,
                #[prost(int32, tag = "6")]
                pub r#type: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BoardText {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(message, optional, tag = "2")]
                pub text: ::core::option::Option<common_types::Text>,
                #[prost(enumeration = "BoardLayer", tag = "3")]
                pub layer: i32,
                #[prost(bool, tag = "4")]
                pub knockout: bool,
                #[prost(int32, tag = "5")]
                pub locked: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Field {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<FieldId>,
                #[prost(string, tag = "2")]
                pub name: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "3")]
                pub text: ::core::option::Option<BoardText>,
                #[prost(bool, tag = "4")]
                pub visible: bool,
            }

            #[derive(Clone, Copy, PartialEq, ::prost::Message)]
            pub struct FieldId {
                #[prost(int32, tag = "1")]
                pub id: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Footprint {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::LibraryIdentifier>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct FootprintInstance {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(message, optional, tag = "2")]
                pub position: ::core::option::Option<common_types::Vector2>,
                #[prost(message, optional, tag = "3")]
                pub orientation: ::core::option::Option<common_types::Angle>,
                #[prost(enumeration = "BoardLayer", tag = "4")]
                pub layer: i32,
                #[prost(int32, tag = "5")]
                pub locked: i32,
                #[prost(message, optional, tag = "6")]
                pub definition: ::core::option::Option<Footprint>,
                #[prost(message, optional, tag = "7")]
                pub reference_field: ::core::option::Option<Field>,
                #[prost(message, optional, tag = "8")]
                pub value_field: ::core::option::Option<Field>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct CopperZoneSettings {
                #[prost(message, optional, tag = "8")]
                pub net: ::core::option::Option<Net>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Zone {
                #[prost(message, optional, tag = "1")]
                pub id: ::core::option::Option<common_types::Kiid>,
                #[prost(int32, tag = "2")]
                pub r#type: i32,
                #[prost(enumeration = "BoardLayer", repeated, tag = "3")]
                pub layers: ::prost::alloc::vec::Vec<i32>,
                #[prost(string, tag = "5")]
                pub name: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "6")]
                pub copper_settings: ::core::option::Option<CopperZoneSettings>,
            }

            macro_rules! board_layers {
                ($($variant:ident = $value:literal => $name:literal,)+) => {
                    #[derive(
                        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
                    )]
                    #[repr(i32)]
                    pub enum BoardLayer {
                        $($variant = $value,)+
                    }

                    impl BoardLayer {
                        pub fn as_str_name(&self) -> &'static str {
                            match self {
                                $(Self::$variant => $name,)+
                            }
                        }
                    }
                };
            }

            board_layers! {
                BlUnknown = 0 => "BL_UNKNOWN",
                BlUndefined = 1 => "BL_UNDEFINED",
                BlUnselected = 2 => "BL_UNSELECTED",
                BlFCu = 3 => "BL_F_Cu",
                BlIn1Cu = 4 => "BL_In1_Cu",
                BlIn2Cu = 5 => "BL_In2_Cu",
                BlIn3Cu = 6 => "BL_In3_Cu",
                BlIn4Cu = 7 => "BL_In4_Cu",
                BlIn5Cu = 8 => "BL_In5_Cu",
                BlIn6Cu = 9 => "BL_In6_Cu",
                BlIn7Cu = 10 => "BL_In7_Cu",
                BlIn8Cu = 11 => "BL_In8_Cu",
                BlIn9Cu = 12 => "BL_In9_Cu",
                BlIn10Cu = 13 => "BL_In10_Cu",
                BlIn11Cu = 14 => "BL_In11_Cu",
                BlIn12Cu = 15 => "BL_In12_Cu",
                BlIn13Cu = 16 => "BL_In13_Cu",
                BlIn14Cu = 17 => "BL_In14_Cu",
                BlIn15Cu = 18 => "BL_In15_Cu",
                BlIn16Cu = 19 => "BL_In16_Cu",
                BlIn17Cu = 20 => "BL_In17_Cu",
                BlIn18Cu = 21 => "BL_In18_Cu",
                BlIn19Cu = 22 => "BL_In19_Cu",
                BlIn20Cu = 23 => "BL_In20_Cu",
                BlIn21Cu = 24 => "BL_In21_Cu",
                BlIn22Cu = 25 => "BL_In22_Cu",
                BlIn23Cu = 26 => "BL_In23_Cu",
                BlIn24Cu = 27 => "BL_In24_Cu",
                BlIn25Cu = 28 => "BL_In25_Cu",
                BlIn26Cu = 29 => "BL_In26_Cu",
                BlIn27Cu = 30 => "BL_In27_Cu",
                BlIn28Cu = 31 => "BL_In28_Cu",
                BlIn29Cu = 32 => "BL_In29_Cu",
                BlIn30Cu = 33 => "BL_In30_Cu",
                BlBCu = 34 => "BL_B_Cu",
                BlBAdhes = 35 => "BL_B_Adhes",
                BlFAdhes = 36 => "BL_F_Adhes",
                BlBPaste = 37 => "BL_B_Paste",
                BlFPaste = 38 => "BL_F_Paste",
                BlBSilkS = 39 => "BL_B_SilkS",
                BlFSilkS = 40 => "BL_F_SilkS",
                BlBMask = 41 => "BL_B_Mask",
                BlFMask = 42 => "BL_F_Mask",
                BlDwgsUser = 43 => "BL_Dwgs_User",
                BlCmtsUser = 44 => "BL_Cmts_User",
                BlEco1User = 45 => "BL_Eco1_User",
                BlEco2User = 46 => "BL_Eco2_User",
                BlEdgeCuts = 47 => "BL_Edge_Cuts",
                BlMargin = 48 => "BL_Margin",
                BlBCrtYd = 49 => "BL_B_CrtYd",
                BlFCrtYd = 50 => "BL_F_CrtYd",
                BlBFab = 51 => "BL_B_Fab",
                BlFFab = 52 => "BL_F_Fab",
                BlUser1 = 53 => "BL_User_1",
                BlUser2 = 54 => "BL_User_2",
                BlUser3 = 55 => "BL_User_3",
                BlUser4 = 56 => "BL_User_4",
                BlUser5 = 57 => "BL_User_5",
                BlUser6 = 58 => "BL_User_6",
                BlUser7 = 59 => "BL_User_7",
                BlUser8 = 60 => "BL_User_8",
                BlUser9 = 61 => "BL_User_9",
            }
        }
    }
}
