//! Ordered field set produced by the tokenizer.

/// One `(tag, value)` pair as it appeared in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub value: String,
}

/// Ordered sequence of fields. Insertion order is preserved and tags may
/// repeat, which matters for the repeating transaction blocks of MT102 and
/// MT101.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
}

impl FieldSet {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First value for `tag`, if present.
    pub fn first(&self, tag: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    /// All values for `tag`, in message order.
    pub fn all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> {
        self.fields
            .iter()
            .filter(move |f| f.tag == tag)
            .map(|f| f.value.as_str())
    }

    pub fn has(&self, tag: &str) -> bool {
        self.fields.iter().any(|f| f.tag == tag)
    }

    pub fn count(&self, tag: &str) -> usize {
        self.fields.iter().filter(|f| f.tag == tag).count()
    }

    /// First `(tag, value)` matching any of `tags`, in message order.
    ///
    /// MT letter-option fields (`52A`/`52D`, `57A`/`57B`/`57C`/`57D`, ...)
    /// are looked up this way.
    pub fn first_of<'a>(&'a self, tags: &[&str]) -> Option<(&'a str, &'a str)> {
        self.fields
            .iter()
            .find(|f| tags.contains(&f.tag.as_str()))
            .map(|f| (f.tag.as_str(), f.value.as_str()))
    }

    pub fn has_any(&self, tags: &[&str]) -> bool {
        self.fields.iter().any(|f| tags.contains(&f.tag.as_str()))
    }

    /// Split into the prefix before the first `boundary` tag and one block
    /// per `boundary` occurrence (the boundary field leads its block).
    ///
    /// MT102/MT101 transaction sequences are delimited by `:21:`; everything
    /// before the first `:21:` belongs to the message-level prefix.
    pub fn split_blocks(&self, boundary: &str) -> (FieldSet, Vec<FieldSet>) {
        let mut prefix = Vec::new();
        let mut blocks: Vec<Vec<Field>> = Vec::new();

        for field in &self.fields {
            if field.tag == boundary {
                blocks.push(vec![field.clone()]);
            } else if let Some(current) = blocks.last_mut() {
                current.push(field.clone());
            } else {
                prefix.push(field.clone());
            }
        }

        (
            FieldSet::new(prefix),
            blocks.into_iter().map(FieldSet::new).collect(),
        )
    }
}
