use super::*;

#[test]
fn virtual_properties_read_the_same_for_both_variants() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        assert_eq!(runtime.get_property(&buffer, &key("length"))?, Value::Number(16));
        assert_eq!(runtime.get_property(&buffer, &key("byteLength"))?, Value::Number(16));
        assert_eq!(runtime.get_property(&buffer, &key("byteOffset"))?, Value::Number(0));
        assert_eq!(
            runtime.get_property(&buffer, &key("BYTES_PER_ELEMENT"))?,
            Value::Number(1)
        );
        assert_eq!(runtime.get_property(&buffer, &key("buffer"))?, Value::Undefined);
        assert_eq!(runtime.get_property(&buffer, &Value::Number(0))?, Value::Number(0x61));
        assert_eq!(runtime.get_property(&buffer, &Value::Number(15))?, Value::Number(0x70));
    }
    Ok(())
}

#[test]
fn in_operator_grid_matches_for_both_variants() -> Result<()> {
    let mut runtime = Runtime::new();
    let [pb, ab] = both_variants(&mut runtime)?;
    let cases = [
        (key("length"), true),
        (key("byteLength"), true),
        (key("byteOffset"), true),
        (key("BYTES_PER_ELEMENT"), true),
        (Value::Number(-1), false),
        (Value::Number(0), true),
        (Value::Number(15), true),
        (Value::Number(16), false),
        (key("15"), true),
        (key("16"), false),
        (key("15.0"), false),
        (key("buffer"), false),
    ];
    for (case, expected) in cases {
        assert_eq!(runtime.has_property(&pb, &case)?, expected, "plain {case:?}");
        assert_eq!(runtime.has_property(&ab, &case)?, expected, "ArrayBuffer {case:?}");
    }
    Ok(())
}

#[test]
fn writes_to_virtual_names_are_silently_ignored() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        for name in ["length", "byteLength", "byteOffset", "BYTES_PER_ELEMENT", "buffer"] {
            runtime.set_property(&buffer, &key(name), Value::Number(99))?;
        }
        assert_eq!(runtime.get_property(&buffer, &key("length"))?, Value::Number(16));
        assert_eq!(runtime.get_property(&buffer, &key("byteOffset"))?, Value::Number(0));
        assert_eq!(runtime.get_property(&buffer, &key("buffer"))?, Value::Undefined);
        assert!(!runtime.delete_property(&buffer, &key("length"))?);
        assert!(!runtime.delete_property(&buffer, &Value::Number(3))?);
        assert_eq!(runtime.get_property(&buffer, &Value::Number(3))?, Value::Number(0x64));
    }
    Ok(())
}

#[test]
fn index_writes_coerce_to_uint8() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        let cases = [
            (Value::Number(0x161), 0x61),
            (Value::Number(-1), 0xff),
            (Value::Float(65.9), 65),
            (key("98"), 98),
            (key("0x10"), 16),
            (key("abc"), 0),
            (Value::Bool(true), 1),
            (Value::Undefined, 0),
        ];
        for (value, expected) in cases {
            runtime.set_property(&buffer, &Value::Number(1), value.clone())?;
            assert_eq!(
                runtime.get_property(&buffer, &Value::Number(1))?,
                Value::Number(expected),
                "{value:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn writing_a_buffer_into_a_byte_goes_through_string_coercion() -> Result<()> {
    let mut runtime = Runtime::new();
    let target = runtime.new_raw_buffer(1);
    let source = runtime.new_array_buffer(4);
    runtime.set_property(&target, &Value::Number(0), source.clone())?;
    assert_eq!(runtime.get_property(&target, &Value::Number(0))?, Value::Number(0));

    let proto = runtime.array_buffer_prototype();
    let hook = runtime.new_native_function("toString", |_, _, _| Ok(Value::String("200".into())));
    runtime.set_property(&proto, &key("toString"), hook)?;
    runtime.set_property(&target, &Value::Number(0), source)?;
    assert_eq!(runtime.get_property(&target, &Value::Number(0))?, Value::Number(200));
    Ok(())
}

#[test]
fn out_of_range_and_non_canonical_keys_do_not_touch_bytes() -> Result<()> {
    let mut runtime = Runtime::new();
    for buffer in both_variants(&mut runtime)? {
        runtime.set_property(&buffer, &Value::Number(16), Value::Number(1))?;
        assert_eq!(runtime.get_property(&buffer, &Value::Number(16))?, Value::Undefined);
        assert_eq!(runtime.get_property(&buffer, &Value::Number(-1))?, Value::Undefined);
        assert_eq!(runtime.get_property(&buffer, &key("15.0"))?, Value::Undefined);
        assert_eq!(runtime.get_property(&buffer, &key("015"))?, Value::Undefined);
        assert_eq!(
            buffer.as_buffer().map(BufferValue::bytes),
            Some((0x61..=0x70).collect::<Vec<u8>>())
        );
    }
    Ok(())
}

#[test]
fn array_buffer_keeps_ordinary_own_properties() -> Result<()> {
    let mut runtime = Runtime::new();
    let [pb, ab] = both_variants(&mut runtime)?;

    runtime.set_property(&ab, &key("15.0"), key("stored"))?;
    runtime.set_property(&ab, &key("tag"), Value::Number(7))?;
    assert_eq!(runtime.get_property(&ab, &key("15.0"))?, key("stored"));
    assert_eq!(runtime.get_property(&ab, &key("tag"))?, Value::Number(7));
    assert!(runtime.has_property(&ab, &key("15.0"))?);
    assert!(runtime.delete_property(&ab, &key("tag"))?);
    assert_eq!(runtime.get_property(&ab, &key("tag"))?, Value::Undefined);

    runtime.set_property(&pb, &key("tag"), Value::Number(7))?;
    assert_eq!(runtime.get_property(&pb, &key("tag"))?, Value::Undefined);
    assert!(!runtime.has_property(&pb, &key("tag"))?);
    Ok(())
}

#[test]
fn array_buffer_falls_through_to_its_prototype_but_raw_buffer_does_not() -> Result<()> {
    let mut runtime = Runtime::new();
    let [pb, ab] = both_variants(&mut runtime)?;
    let proto = runtime.array_buffer_prototype();
    runtime.set_property(&proto, &key("shared"), key("from-proto"))?;

    assert_eq!(runtime.get_property(&ab, &key("shared"))?, key("from-proto"));
    assert!(runtime.has_property(&ab, &key("toString"))?);
    assert_eq!(runtime.get_property(&pb, &key("shared"))?, Value::Undefined);
    assert!(!runtime.has_property(&pb, &key("toString"))?);
    Ok(())
}

#[test]
fn virtual_names_shadow_prototype_properties() -> Result<()> {
    let mut runtime = Runtime::new();
    let ab = create_array_buffer(&mut runtime)?;
    let proto = runtime.array_buffer_prototype();
    runtime.set_property(&proto, &key("byteLength"), Value::Number(-5))?;
    runtime.set_property(&proto, &key("buffer"), key("shadowed"))?;
    assert_eq!(runtime.get_property(&ab, &key("byteLength"))?, Value::Number(16));
    assert_eq!(runtime.get_property(&ab, &key("buffer"))?, Value::Undefined);
    Ok(())
}

#[test]
fn zero_length_buffers_expose_no_indices() -> Result<()> {
    let mut runtime = Runtime::new();
    let raw = runtime.new_raw_buffer(0);
    let object = runtime.new_array_buffer(0);
    for buffer in [raw, object] {
        assert_eq!(runtime.get_property(&buffer, &key("length"))?, Value::Number(0));
        assert!(!runtime.has_property(&buffer, &Value::Number(0))?);
        runtime.set_property(&buffer, &Value::Number(0), Value::Number(1))?;
        assert_eq!(runtime.get_property(&buffer, &Value::Number(0))?, Value::Undefined);
    }
    Ok(())
}
