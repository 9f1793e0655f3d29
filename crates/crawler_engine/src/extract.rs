use scraper::{Html, Selector};

use crawler_core::{Record, RecordId};

use crate::fetch::RecipePayload;

pub trait FieldExtractor: Send + Sync {
    fn extract(&self, id: RecordId, payload: &RecipePayload) -> Record;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Category,
    Method,
    Ingredients,
    Tags,
    Tip,
}

/// How matched nodes collapse into one field value.
#[derive(Debug, Clone, Copy)]
enum Gather {
    /// Text of the first matching node.
    First,
    /// Text of every matching node, joined with ", ".
    JoinAll,
}

/// The whole page layout the extractor knows about, as data. A missing node
/// simply leaves the field at its empty-string default.
const RULES: &[(Field, &str, Gather)] = &[
    (Field::Title, ".view2_summary h3", Gather::First),
    (Field::Category, ".view2_summary_info .cate", Gather::First),
    (Field::Method, ".view2_summary_info .method", Gather::First),
    (
        Field::Ingredients,
        ".ready_ingre3 li .ingre_list_name",
        Gather::JoinAll,
    ),
    (Field::Tags, ".view_tag a", Gather::JoinAll),
    (Field::Tip, ".view_tip", Gather::First),
];

/// Evaluates the rule table against the payload's markup fragment. Never
/// fails: malformed or partial markup degrades field by field to `""`, and
/// the payload's top-level `name` takes precedence for the title.
#[derive(Debug, Default)]
pub struct SelectorRuleExtractor;

impl FieldExtractor for SelectorRuleExtractor {
    fn extract(&self, id: RecordId, payload: &RecipePayload) -> Record {
        let doc = Html::parse_fragment(&payload.html);
        let mut record = Record::blank(id);

        for (field, selector, gather) in RULES {
            let value = evaluate(&doc, selector, *gather);
            match field {
                Field::Title => record.title = value,
                Field::Category => record.category = value,
                Field::Method => record.method = value,
                Field::Ingredients => record.ingredients = value,
                Field::Tags => record.tags = value,
                Field::Tip => record.tip = value,
            }
        }

        let name = payload.name.trim();
        if !name.is_empty() {
            record.title = name.to_string();
        }
        record
    }
}

fn evaluate(doc: &Html, selector: &str, gather: Gather) -> String {
    let Ok(sel) = Selector::parse(selector) else {
        return String::new();
    };
    match gather {
        Gather::First => doc
            .select(&sel)
            .next()
            .map(|node| node.text().collect::<String>().trim().to_string())
            .unwrap_or_default(),
        Gather::JoinAll => doc
            .select(&sel)
            .map(|node| node.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}
