/// One node of the flattened menu, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    MenuStart,
    MenuEnd,
    SubcategoryStart {
        name: String,
        icon: String,
    },
    SubcategoryEnd {
        name: String,
    },
    Program {
        name: String,
        icon: String,
        executable: String,
        comment: String,
    },
}

impl Representation {
    /// Human-readable label, used in comments and debugging output.
    pub fn name(&self) -> String {
        match self {
            Representation::MenuStart => "Menu start".to_owned(),
            Representation::MenuEnd => "Menu end".to_owned(),
            Representation::SubcategoryStart { name, .. } | Representation::Program { name, .. } => {
                name.clone()
            }
            Representation::SubcategoryEnd { name } => format!("{name} end"),
        }
    }
}
