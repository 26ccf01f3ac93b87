use super::*;

#[test]
fn a_buffer_equals_itself_under_both_operators() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        let alias = buffer.clone();
        assert!(runtime.strict_equals(&buffer, &alias));
        assert!(runtime.loose_equals(&buffer, &alias)?);
    }
    Ok(())
}

#[test]
fn distinct_buffers_with_identical_bytes_are_unequal() -> Result<()> {
    let mut runtime = Runtime::new();
    let first = both_variants(&mut runtime)?;
    let second = both_variants(&mut runtime)?;
    for (left, right) in first.iter().zip(second.iter()) {
        assert_eq!(
            left.as_buffer().map(BufferValue::bytes),
            right.as_buffer().map(BufferValue::bytes)
        );
        assert!(!runtime.strict_equals(left, right));
        assert!(!runtime.loose_equals(left, right)?);
    }

    let [pb, ab] = first;
    assert!(!runtime.strict_equals(&pb, &ab));
    assert!(!runtime.loose_equals(&pb, &ab)?);
    Ok(())
}

#[test]
fn value_partial_eq_follows_identity() -> Result<()> {
    let mut runtime = Runtime::new();
    let pb = create_plain(&mut runtime)?;
    let other = create_plain(&mut runtime)?;
    assert_eq!(pb, pb.clone());
    assert_ne!(pb, other);
    Ok(())
}

#[test]
fn loose_equality_against_a_string_uses_the_class_tag() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        assert!(runtime.loose_equals(&buffer, &key("[object ArrayBuffer]"))?);
        assert!(runtime.loose_equals(&key("[object ArrayBuffer]"), &buffer)?);
        assert!(!runtime.loose_equals(&buffer, &key("abcdefghijklmnop"))?);
        assert!(!runtime.strict_equals(&buffer, &key("[object ArrayBuffer]")));
    }
    Ok(())
}

#[test]
fn loose_equality_against_null_and_undefined_is_false() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        assert!(!runtime.loose_equals(&buffer, &Value::Null)?);
        assert!(!runtime.loose_equals(&Value::Undefined, &buffer)?);
    }
    Ok(())
}

#[test]
fn to_object_preserves_identity() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        let boxed = runtime.to_object(&buffer)?;
        assert!(runtime.strict_equals(&boxed, &buffer));
        assert!(runtime.loose_equals(&buffer, &boxed)?);
    }
    Ok(())
}

#[test]
fn aliases_observe_each_others_writes() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        let alias = buffer.clone();
        runtime.set_property(&alias, &Value::Number(0), Value::Number(0x7a))?;
        assert_eq!(runtime.get_property(&buffer, &Value::Number(0))?, Value::Number(0x7a));
    }
    Ok(())
}

#[test]
fn views_share_identity_with_their_source() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        let view = runtime.create_view(&buffer, TypedArrayKind::Uint8)?;
        let source = runtime.get_property(&view, &key("buffer"))?;
        assert!(runtime.strict_equals(&source, &buffer));

        let second = runtime.create_view(&buffer, TypedArrayKind::Uint8)?;
        assert!(!runtime.strict_equals(&view, &second));
    }
    Ok(())
}

#[test]
fn objects_compare_by_identity_even_when_self_referencing() -> Result<()> {
    let mut runtime = Runtime::new();
    let first = runtime.new_object();
    let second = runtime.new_object();
    assert!(first != second);
    assert!(first == first.clone());

    runtime.set_property(&first, &key("self"), first.clone())?;
    runtime.set_property(&second, &key("self"), second.clone())?;
    assert!(first != second);
    let inner = runtime.get_property(&first, &key("self"))?;
    assert!(inner == first);
    assert!(runtime.strict_equals(&inner, &first));

    let object_proto = runtime.object_prototype();
    let to_string = runtime.get_property(&object_proto, &key("toString"))?;
    let same = runtime.get_property(&object_proto, &key("toString"))?;
    assert!(to_string == same);
    let pb = create_plain(&mut runtime)?;
    let view = runtime.create_view(&pb, TypedArrayKind::Uint8)?;
    let other_view = runtime.create_view(&pb, TypedArrayKind::Uint8)?;
    assert!(view != other_view);
    Ok(())
}
