use charmap::Charmap;
use std::ffi::CStr;
use std::mem;

#[test]
fn layout() {
    assert_eq!(mem::size_of::<Charmap>(), 32);
    assert_eq!(mem::align_of::<Charmap>(), mem::align_of::<u32>());
}

#[test]
fn words_map_to_bytes() {
    for b in 0..=u8::MAX {
        let mut words = [0u32; 8];
        words[usize::from(b / 32)] = 1 << (b % 32);
        let charmap = Charmap::from_words(words);
        for c in 0..=u8::MAX {
            assert_eq!(charmap.contains(c), b == c, "{b:#04x} {c:#04x}");
        }
    }

    let full = Charmap::from_words([u32::MAX; 8]);
    assert!(full.contains(0));
    assert!(full.contains(0xFF));
    assert!((0..=u8::MAX).all(|b| full.contains(b)));
}

#[test]
fn from_bytes() {
    let charmap = Charmap::from_bytes(b"ab");
    assert!(charmap.contains(b'a'));
    assert!(charmap.contains(b'b'));
    assert!(!charmap.contains(b'c'));
    assert!(!charmap.contains(0));

    assert_eq!(Charmap::from_bytes(b"aa"), Charmap::from_bytes(b"a"));
    assert_eq!(Charmap::from_bytes(b"cba"), Charmap::from_bytes(b"abc"));
}

#[test]
fn nul_is_a_member_with_explicit_length() {
    let charmap = Charmap::from_bytes(b"a\0b");
    assert!(charmap.contains(0));
    assert!(charmap.contains(b'a'));
    assert!(charmap.contains(b'b'));
}

#[test]
fn nul_terminates() {
    assert_eq!(Charmap::from_nul_terminated(b"ab\0"), Charmap::from_bytes(b"ab"));
    assert_eq!(Charmap::from_nul_terminated(b"ab"), Charmap::from_bytes(b"ab"));
    assert_eq!(Charmap::from_nul_terminated(b"a\0b"), Charmap::from_bytes(b"a"));
    assert!(Charmap::from_nul_terminated(b"\0ab").is_empty());
    assert!(!Charmap::from_nul_terminated(b"ab\0").contains(0));

    let cstr = CStr::from_bytes_with_nul(b"ab\0").unwrap();
    assert_eq!(Charmap::from_cstr(cstr), Charmap::from_bytes(b"ab"));
}

#[test]
fn empty() {
    assert!(Charmap::from_bytes(b"").is_empty());
    assert!(Charmap::from_nul_terminated(b"").is_empty());
    assert!(Charmap::from_words([0; 8]).is_empty());
    assert!(Charmap::default().is_empty());
    assert!(!Charmap::from_bytes(b"\0").is_empty());
    assert!(!Charmap::from_bytes(b"\xFF").is_empty());
    for i in 0..8 {
        let mut words = [0u32; 8];
        words[i] = 1 << 31;
        assert!(!Charmap::from_words(words).is_empty());
    }
}

#[test]
fn intersects_with() {
    let abc = Charmap::from_bytes(b"abc");
    let xyz = Charmap::from_bytes(b"xyz");
    let cde = Charmap::from_bytes(b"cde");
    assert!(!abc.intersects_with(&xyz));
    assert!(!xyz.intersects_with(&abc));
    assert!(abc.intersects_with(&cde));
    assert!(cde.intersects_with(&abc));

    let high = Charmap::from_bytes(b"\xFE\xFF");
    assert!(high.intersects_with(&Charmap::from_bytes(b"\xFF")));
    assert!(!high.intersects_with(&Charmap::from_bytes(b"\x7F")));
}

#[test]
fn self_intersection() {
    for charmap in [
        Charmap::default(),
        Charmap::from_bytes(b"\0"),
        Charmap::from_bytes(b"abc"),
        Charmap::from_words([0, 0, 0, 0, 0, 0, 0, 1 << 31]),
        Charmap::from_words([u32::MAX; 8]),
    ] {
        assert_eq!(charmap.intersects_with(&charmap), !charmap.is_empty(), "{charmap:?}");
    }
}

#[test]
fn const_construction() {
    const DELIMS: Charmap = Charmap::from_bytes(b"/?#");
    const TERMINATED: Charmap = Charmap::from_nul_terminated(b"/?#\0ignored");
    const EMPTY: bool = DELIMS.intersects_with(&Charmap::from_words([0; 8]));
    assert_eq!(DELIMS, TERMINATED);
    assert!(DELIMS.contains(b'?'));
    assert!(!EMPTY);
}

#[test]
fn debug() {
    assert_eq!(format!("{:?}", Charmap::from_bytes(b"ba\0")), "{0, 97, 98}");
    assert_eq!(format!("{:?}", Charmap::default()), "{}");
}
