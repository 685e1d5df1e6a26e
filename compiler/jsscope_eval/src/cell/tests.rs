use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_object_cell_keeps_insertion_order() {
    let [a, b, c] = [10, 11, 12].map(Name::from_raw);
    let mut object = ObjectCell::new();
    object.set(b, Value::number(1));
    object.set(a, Value::number(2));
    object.set(c, Value::number(3));
    // overwrite keeps position
    object.set(b, Value::number(4));

    assert_eq!(object.keys(), &[b, a, c]);
    assert_eq!(object.get(b), Some(&Value::number(4)));
    assert_eq!(object.len(), 3);
}

#[test]
fn test_heap_alloc_and_mutate_through_id() {
    let mut heap = CellHeap::new();
    let id = heap.alloc(Cell::Array(vec![Value::number(1)]));
    let alias = id;

    if let Ok(Cell::Array(items)) = heap.get_mut(id) {
        items.push(Value::number(2));
    }
    let Ok(Cell::Array(items)) = heap.get(alias) else {
        panic!("expected array cell");
    };
    assert_eq!(items.len(), 2);
}

#[test]
fn test_swept_cell_is_stale() {
    let mut heap = CellHeap::new();
    let id = heap.alloc(Cell::Object(ObjectCell::new()));
    assert_eq!(heap.sweep(&[]), 1);
    assert!(heap.is_empty());
    assert!(heap.get(id).is_err());
}

#[test]
fn test_kind_names() {
    assert_eq!(Cell::Array(vec![]).kind_name(), "array");
    assert_eq!(Cell::Object(ObjectCell::new()).kind_name(), "object");
}
