use super::*;
use pretty_assertions::assert_eq;

#[test]
fn primitive_lookup_round_trips_every_type_name() {
    for prim in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::from_type_name(prim.type_name()), Some(prim));
    }
    assert_eq!(PrimitiveType::from_type_name("expr"), None);
}

#[test]
fn only_added_and_changed_are_abstract() {
    assert!(!Evolution::Inherited.is_transform_abstract());
    assert!(Evolution::Added.is_transform_abstract());
    assert!(Evolution::Changed.is_transform_abstract());
}

#[test]
fn type_ref_domain_tag() {
    assert_eq!(TypeRef::Domain("expr".into()).domain_tag(), Some("expr"));
    assert_eq!(TypeRef::Primitive(PrimitiveType::Int).domain_tag(), None);
    assert_eq!(TypeRef::Opaque("thing".into()).domain_tag(), None);
}
