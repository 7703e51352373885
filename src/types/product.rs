use std::collections::HashMap;

use crate::types::VertexId;

/// Interns product names as dense vertex ids, in order of first appearance.
#[derive(Debug, Default, Clone)]
pub struct ProductIndex {
    names: Vec<String>,
    ids: HashMap<String, VertexId>,
}

impl ProductIndex {
    pub fn new() -> ProductIndex {
        Default::default()
    }

    pub fn intern(&mut self, name: &str) -> VertexId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn id_of(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: VertexId) -> &str {
        &self.names[id]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
