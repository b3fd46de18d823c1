//! Collection behavior with real value objects.

use datakind_collection::prelude::*;
use datakind_entity::prelude::*;
use datakind_scalar::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};

#[derive(Debug, Default, Clone)]
struct Product {
    id: Option<PositiveInteger>,
    title: ImmutableText,
    secret: ImmutableText,
}

impl Product {
    fn cast_id(&mut self, value: &Value) -> Result<()> {
        self.id = Some(cast::positive_integer("id", value)?);
        Ok(())
    }

    fn cast_title(&mut self, value: &Value) -> Result<()> {
        self.title = cast::text("title", value)?;
        Ok(())
    }

    fn cast_secret(&mut self, value: &Value) -> Result<()> {
        self.secret = cast::text("secret", value)?;
        Ok(())
    }

    fn new(id: i64, title: &str) -> Self {
        Self::from_value(json!({"id": id, "title": title, "secret": "s"})).unwrap()
    }
}

impl ValueObject for Product {
    const SCHEMA: Schema<Self> = Schema {
        required: RequiredFields(&["id", "title"]),
        guarded: GuardedFields(&["secret"]),
        casts: &[
            Cast::new("id", Self::cast_id),
            Cast::new("title", Self::cast_title),
            Cast::new("secret", Self::cast_secret),
        ],
        ..Schema::EMPTY
    };

    fn write_fields(&self, out: &mut FieldWriter) -> Result<()> {
        out.value("id", &self.id)?
            .value("title", &self.title)?
            .value("secret", &self.secret)?;
        Ok(())
    }
}

impl Identifiable for Product {
    fn id(&self) -> i64 {
        self.id.map_or(0, PositiveInteger::get)
    }
}

#[test]
fn test_stack_scenario() {
    let mut stack = Stack::new();
    let popped = stack.push("a").unwrap().push("b").unwrap().pop();
    assert_eq!(popped.map(String::from), Some("b".to_owned()));
    assert_eq!(stack.peek().map(|t| t.as_str()), Some("a"));
}

#[test]
fn test_stack_and_queue_share_capacity_policy() {
    let cap = PositiveInteger::new(1).unwrap();
    let mut stack = Stack::with_capacity(cap);
    let mut queue = Queue::with_capacity(cap);
    stack.push("a").unwrap();
    queue.push("a").unwrap();
    assert_eq!(stack.push("b").unwrap_err(), queue.push("b").unwrap_err());
}

#[test]
fn test_stack_serializes_bottom_to_top() {
    let stack = Stack::from_items(["x", "y"], None).unwrap();
    assert_eq!(serde_json::to_value(&stack).unwrap(), json!(["x", "y"]));
}

#[test]
fn test_duplicate_entity_scenario() {
    let mut products = EntityCollection::new();
    let err = products
        .add(Product::new(5, "lamp"))
        .and_then(|c| c.add(Product::new(5, "desk")))
        .unwrap_err();
    assert_eq!(err, DataError::duplicate_entry(5));
    assert_eq!(products.get(5).unwrap().title.as_str(), "lamp");
}

#[test]
fn test_entity_collection_json_hides_guarded() {
    let products =
        EntityCollection::from_entities([Product::new(2, "b"), Product::new(1, "a")]).unwrap();
    assert_eq!(
        products.to_json().unwrap(),
        json!([{"id": 2, "title": "b"}, {"id": 1, "title": "a"}])
    );
    assert_eq!(
        serde_json::to_value(&products).unwrap(),
        products.to_json().unwrap()
    );
}

#[test]
fn test_paginated_collection() {
    let page = EntityCollection::from_entities([
        Product::new(11, "k"),
        Product::new(12, "l"),
        Product::new(13, "m"),
    ])
    .unwrap();
    let request = PageRequest::new(2, 5).unwrap();
    let meta = PageMeta::for_request(request, 8)
        .unwrap()
        .with_sort(SortDescriptor::asc("title"));
    let paginated = PaginatedCollection::new(page, meta).unwrap();

    assert_eq!(paginated.from_record(), 6);
    assert_eq!(paginated.to_record(), 8);
    assert!(paginated.is_last_page());
    assert!(!paginated.is_first_page());
    assert!(!paginated.has_more_pages());
    assert_eq!(paginated.next_page(), None);
    assert_eq!(paginated.previous_page().map(PositiveInteger::get), Some(1));
    assert_eq!(paginated.meta().first_id, Some(11));
    assert_eq!(paginated.meta().last_id, Some(13));

    assert_eq!(
        paginated.to_json().unwrap(),
        json!({
            "data": [
                {"id": 11, "title": "k"},
                {"id": 12, "title": "l"},
                {"id": 13, "title": "m"},
            ],
            "meta": {
                "sort": {"field": "title", "direction": "asc"},
                "total": 8,
                "first_id": 11,
                "last_id": 13,
                "current_page": 2,
                "last_page": 2,
                "per_page": 5,
                "from": 6,
                "to": 8,
            },
        })
    );
}

#[test]
fn test_paginated_counters_do_not_follow_collection() {
    let page = EntityCollection::from_entities([Product::new(1, "a")]).unwrap();
    let meta = PageMeta::for_request(PageRequest::default(), 1).unwrap();
    let paginated = PaginatedCollection::new(page, meta).unwrap();

    let mut items = paginated.clone().into_items();
    items.add(Product::new(2, "b")).unwrap();
    assert_eq!(paginated.meta().total, 1);
    assert_eq!(paginated.items().count(), 1);
}

#[test]
fn test_page_past_last_rejected() {
    let meta = PageMeta::for_request(PageRequest::new(3, 10).unwrap(), 5).unwrap();
    let err = PaginatedCollection::new(EntityCollection::<Product>::new(), meta).unwrap_err();
    assert!(matches!(err, DataError::ParameterOutOfRange { .. }));
}

proptest! {
    #[test]
    fn prop_add_then_remove_restores_count(
        ids in proptest::collection::btree_set(1i64..500, 0..20),
        extra in 500i64..1000,
    ) {
        let mut products = EntityCollection::from_entities(
            ids.iter().map(|id| Product::new(*id, "p")),
        ).unwrap();
        let before = products.count();
        products.add(Product::new(extra, "x")).unwrap();
        products.remove(extra).unwrap();
        prop_assert_eq!(products.count(), before);
        prop_assert_eq!(products.ids(), ids.into_iter().collect::<Vec<_>>());
    }
}
