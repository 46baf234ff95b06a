use brtools::documents::{brazilian_cnpj_validator, brazilian_cpf_validator};
use brtools::masks::{
    brazilian_telephone_mask, brazilian_zipcode_mask, clear_mask, cpf_or_cnpj_mask,
};
use brtools::phone::global_cellphone_mask;

#[test]
fn cpf_validation_is_formatting_insensitive() {
    let bare = "12345678909";
    let masked = cpf_or_cnpj_mask(bare);
    assert_eq!(masked, "123.456.789-09");
    assert_eq!(
        brazilian_cpf_validator(bare),
        brazilian_cpf_validator(&masked)
    );
}

#[test]
fn mask_and_clear_round_trip_for_cpf_lengths() {
    let samples = ["12345678909", "52998224725", "00000000000", "98765432100"];
    for d in samples {
        assert_eq!(clear_mask(&cpf_or_cnpj_mask(d)), d);
    }
}

#[test]
fn mask_and_clear_round_trip_for_cnpj_lengths() {
    let samples = ["12345678000195", "11222333000181"];
    for d in samples {
        assert_eq!(clear_mask(&cpf_or_cnpj_mask(d)), d);
    }
}

#[test]
fn repeated_digit_cpfs_are_always_rejected() {
    for d in 0..=9u8 {
        let repeated: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
        assert!(!brazilian_cpf_validator(&repeated), "{repeated}");
        // arithmetic-valid but structurally forbidden even when masked
        assert!(!brazilian_cpf_validator(&cpf_or_cnpj_mask(&repeated)));
    }
}

#[test]
fn known_cpf_vectors() {
    assert!(brazilian_cpf_validator("12345678909"));
    assert!(!brazilian_cpf_validator("12345678900"));
}

#[test]
fn known_cnpj_vectors() {
    assert!(brazilian_cnpj_validator("12345678000195"));
    assert!(!brazilian_cnpj_validator("12345678000196"));
}

#[test]
fn document_masks_match_display_formats() {
    assert_eq!(cpf_or_cnpj_mask("12345678909"), "123.456.789-09");
    assert_eq!(cpf_or_cnpj_mask("12345678000195"), "12.345.678/0001-95");
}

#[test]
fn zipcode_and_telephone_masks() {
    assert_eq!(brazilian_zipcode_mask("12345678"), "12345-678");
    assert_eq!(brazilian_telephone_mask("1123456789"), "(11) 2345-6789");
    assert_eq!(brazilian_telephone_mask("11987654321"), "(11) 98765-4321");
}

#[test]
fn country_masks_and_pass_through() {
    assert_eq!(global_cellphone_mask("US", "1234567890"), "(123) 456-7890");
    assert_eq!(global_cellphone_mask("BR", "11987654321"), "(11) 98765-4321");
    assert_eq!(global_cellphone_mask("ZZ", "123-456"), "123456");
}

#[test]
fn clear_mask_handles_international_prefix() {
    assert_eq!(clear_mask("+55 (21) 98765-4321"), "5521987654321");
}

#[test]
fn clear_mask_is_idempotent_over_arbitrary_strings() {
    let samples = [
        "",
        "abc",
        "123.456.789-09",
        "R$ 1.234,56",
        "+55 (21) 98765-4321",
        "já formatado",
    ];
    for s in samples {
        assert_eq!(clear_mask(&clear_mask(s)), clear_mask(s));
    }
}
