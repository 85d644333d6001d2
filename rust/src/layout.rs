use crate::point::Point;
use serde::Serialize;
use std::mem::{align_of, offset_of, size_of};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: String,
    pub index: usize,
    pub offset: usize,
    pub size: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: String,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl RecordLayout {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_at(&self, index: usize) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.index == index)
    }
}

impl Point {
    /// Memory layout of the record as the compiler lays it out.
    pub fn layout() -> RecordLayout {
        let field = |name: &str, index: usize, offset: usize| FieldLayout {
            name: name.to_string(),
            index,
            offset,
            size: size_of::<i32>(),
        };
        RecordLayout {
            name: "Point".to_string(),
            size: size_of::<Point>(),
            align: align_of::<Point>(),
            fields: vec![
                field("x", 0, offset_of!(Point, x)),
                field("y", 1, offset_of!(Point, y)),
            ],
        }
    }
}
