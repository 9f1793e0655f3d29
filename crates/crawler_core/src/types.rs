pub type RecordId = u64;

/// One extracted recipe row. Every field is a plain string; markup that is
/// missing on the source page leaves the field empty rather than absent, so
/// all records share a uniform column schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub material_number: RecordId,
    pub title: String,
    pub category: String,
    pub method: String,
    pub ingredients: String,
    pub tags: String,
    pub tip: String,
}

impl Record {
    /// Column order for export. `field_values` must stay in sync.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "material_number",
        "title",
        "category",
        "method",
        "ingredients",
        "tags",
        "tip",
    ];

    /// The all-empty variant representing a failed fetch for `id`.
    pub fn blank(id: RecordId) -> Self {
        Self {
            material_number: id,
            title: String::new(),
            category: String::new(),
            method: String::new(),
            ingredients: String::new(),
            tags: String::new(),
            tip: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.category.is_empty()
            && self.method.is_empty()
            && self.ingredients.is_empty()
            && self.tags.is_empty()
            && self.tip.is_empty()
    }

    /// String fields in `FIELD_NAMES` order, excluding the leading
    /// `material_number` which is numeric and emitted bare.
    pub fn field_values(&self) -> [&str; 6] {
        [
            &self.title,
            &self.category,
            &self.method,
            &self.ingredients,
            &self.tags,
            &self.tip,
        ]
    }
}
