use super::*;


#[test]
fn valid_names() {
    for name in ["+", "-", "*", "/", "car", "list-tail", "null?", "<=", "a1#*!", "=x"] {
        assert_eq!(Symbol::new(name).unwrap().as_str(), name);
    }
}

#[test]
fn invalid_names() {
    for name in ["", "1abc", "a b", "++", "-x", "*a", "?", "#t", "a.b", "a(b"] {
        assert_eq!(
            Symbol::new(name),
            Err(SymbolError::InvalidName(name.to_string()))
        );
    }
}

#[test]
fn char_classes_agree_with_names() {
    for c in (0u8..128).map(char::from) {
        if Symbol::is_start_char(c) {
            assert!(Symbol::new(c.to_string()).is_ok(), "{:?}", c);
            for next in (0u8..128).map(char::from) {
                let name: String = [c, next].iter().collect();
                assert_eq!(
                    Symbol::is_continue_char(next),
                    Symbol::new(&name).is_ok(),
                    "{:?}",
                    name
                );
            }
        }
    }
}
