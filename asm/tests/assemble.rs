use pretty_assertions::assert_eq;
use qcasm::{assemble, Error};

#[test]
fn example_program() {
    let mem = assemble(&[
        "0: LDA 3",
        "1: ADD 4",
        "2: STA 5",
        "3: DATA 10",
        "4: DATA 20",
        "5: DATA 0",
    ])
    .unwrap();

    assert_eq!(mem.get(0), 0b0000_0011);
    assert_eq!(mem.get(1), 0b0010_0100);
    assert_eq!(mem.get(2), 0b0001_0101);
    assert_eq!(mem.get(3), 10);
    assert_eq!(mem.get(4), 20);
    assert_eq!(mem.get(5), 0);
    // All remaining addresses stay zero.
    assert!(mem.iter().skip(6).all(|(_, v)| v == 0));
}

#[test]
fn deterministic() {
    let listing = ["0: LDA 3", "1: BRA -3", "255: DATA 77"];
    let a = assemble(&listing).unwrap();
    let b = assemble(&listing).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_listing_is_all_zero() {
    let mem = assemble::<&str>(&[]).unwrap();
    assert!(mem.iter().all(|(_, v)| v == 0));
}

#[test]
fn data_stores_literal_mod_256() {
    let mem = assemble(&["7: DATA 300"]).unwrap();
    assert_eq!(mem.get(7), 44);
}

#[test]
fn branch_sign_magnitude() {
    let mem = assemble(&["0: BRA -3", "1: BRA 3"]).unwrap();
    assert_eq!(mem.get(0), 0b1110_1011);
    assert_eq!(mem.get(1), 0b1110_0011);
}

#[test]
fn unknown_mnemonic_aborts() {
    let err = assemble(&["0: LDA 3", "5: FOO 1"]).unwrap_err();
    assert_eq!(
        err,
        Error::UnknownMnemonic {
            mnemonic: "FOO".to_string(),
            address: 5
        }
    );
}

#[test]
fn malformed_line_aborts() {
    let err = assemble(&["LDA 3"]).unwrap_err();
    assert_eq!(err, Error::MalformedLine);
}

#[test]
fn address_out_of_range_aborts() {
    let err = assemble(&["300: HLT"]).unwrap_err();
    assert_eq!(err, Error::InvalidAddress("300".to_string()));
}

#[test]
fn later_line_overwrites_same_address() {
    let mem = assemble(&["4: DATA 1", "4: DATA 2"]).unwrap();
    assert_eq!(mem.get(4), 2);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let mem = assemble(&[
        "; setup",
        "",
        "0: LDA 3 ; load operand",
        "10: HLT",
    ])
    .unwrap();
    assert_eq!(mem.get(0), 0b0000_0011);
    assert_eq!(mem.get(10), 0b11111111);
}
