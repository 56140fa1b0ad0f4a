#![cfg_attr(not(feature = "kicad-ipc"), allow(dead_code))]

use std::path::PathBuf;

use crate::proto::kiapi::common::types as common_types;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub full_version: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentType {
    Schematic,
    Symbol,
    Pcb,
    Footprint,
    DrawingSheet,
    Project,
}

impl DocumentType {
    pub(crate) fn to_proto(self) -> i32 {
        match self {
            Self::Schematic => common_types::DocumentType::DoctypeSchematic as i32,
            Self::Symbol => common_types::DocumentType::DoctypeSymbol as i32,
            Self::Pcb => common_types::DocumentType::DoctypePcb as i32,
            Self::Footprint => common_types::DocumentType::DoctypeFootprint as i32,
            Self::DrawingSheet => common_types::DocumentType::DoctypeDrawingSheet as i32,
            Self::Project => common_types::DocumentType::DoctypeProject as i32,
        }
    }

    pub(crate) fn from_proto(value: i32) -> Option<Self> {
        let ty = common_types::DocumentType::try_from(value).ok()?;
        match ty {
            common_types::DocumentType::DoctypeSchematic => Some(Self::Schematic),
            common_types::DocumentType::DoctypeSymbol => Some(Self::Symbol),
            common_types::DocumentType::DoctypePcb => Some(Self::Pcb),
            common_types::DocumentType::DoctypeFootprint => Some(Self::Footprint),
            common_types::DocumentType::DoctypeDrawingSheet => Some(Self::DrawingSheet),
            common_types::DocumentType::DoctypeProject => Some(Self::Project),
            common_types::DocumentType::DoctypeUnknown => None,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Schematic => "schematic",
            Self::Symbol => "symbol",
            Self::Pcb => "pcb",
            Self::Footprint => "footprint",
            Self::DrawingSheet => "drawing-sheet",
            Self::Project => "project",
        };

        write!(f, "{value}")
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProjectInfo {
    pub name: Option<String>,
    pub path: Option<PathBuf>,
}

/// An open document as reported by KiCad.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocumentSpecifier {
    pub document_type: DocumentType,
    pub board_filename: Option<String>,
    pub project: ProjectInfo,
}

impl DocumentSpecifier {
    /// Returns `None` for documents of a type this crate does not know.
    pub(crate) fn from_proto(source: common_types::DocumentSpecifier) -> Option<Self> {
        let document_type = DocumentType::from_proto(source.r#type)?;
        let board_filename = match source.identifier {
            Some(common_types::document_specifier::Identifier::BoardFilename(filename)) => {
                Some(filename)
            }
            _ => None,
        };

        let project = source.project.unwrap_or_default();

        Some(Self {
            document_type,
            board_filename,
            project: ProjectInfo {
                name: Some(project.name).filter(|name| !name.is_empty()),
                path: Some(project.path)
                    .filter(|path| !path.is_empty())
                    .map(PathBuf::from),
            },
        })
    }

    pub(crate) fn to_proto(&self) -> common_types::DocumentSpecifier {
        let identifier = self.board_filename.as_ref().map(|filename| {
            common_types::document_specifier::Identifier::BoardFilename(filename.clone())
        });

        let project = common_types::ProjectSpecifier {
            name: self.project.name.clone().unwrap_or_default(),
            path: self
                .project
                .path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
        };

        common_types::DocumentSpecifier {
            r#type: self.document_type.to_proto(),
            project: Some(project),
            identifier,
        }
    }

    pub fn display_name(&self) -> &str {
        self.board_filename.as_deref().unwrap_or("<unknown>")
    }
}
