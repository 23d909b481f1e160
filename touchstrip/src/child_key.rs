use std::{
    borrow::Cow,
    fmt::{self, Debug, Formatter},
};

/// Identifies a child within its parent's widget base.
///
/// Index keys are auto-assigned by `add_child`; containers that manage
/// well-known internal children use named keys, so the two spaces never
/// collide.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum ChildKey {
    Index(u64),
    Name(Cow<'static, str>),
}

impl Debug for ChildKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl From<u64> for ChildKey {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<&'static str> for ChildKey {
    fn from(value: &'static str) -> Self {
        Self::Name(Cow::Borrowed(value))
    }
}

impl From<String> for ChildKey {
    fn from(value: String) -> Self {
        Self::Name(Cow::Owned(value))
    }
}

impl From<&ChildKey> for ChildKey {
    fn from(value: &ChildKey) -> Self {
        value.clone()
    }
}

#[test]
fn conversions() {
    struct X {
        data: Vec<(ChildKey, String)>,
    }
    impl X {
        fn get(&self, key: impl Into<ChildKey>) -> Option<&String> {
            let key = key.into();
            self.data.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
        }
    }

    let x = X {
        data: vec![
            (ChildKey::from(3), "three".into()),
            (ChildKey::from("panel"), "internal".into()),
        ],
    };
    assert_eq!(x.get(3), Some(&"three".to_string()));
    assert_eq!(x.get("panel"), Some(&"internal".to_string()));
    assert_eq!(x.get(7), None);
    let key = ChildKey::from("panel");
    assert_eq!(x.get(&key), Some(&"internal".to_string()));

    assert_eq!(format!("{:?}", ChildKey::from(5)), "5");
    assert_eq!(format!("{:?}", ChildKey::from("content")), "\"content\"");
}
