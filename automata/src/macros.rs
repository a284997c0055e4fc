#[allow(unused_macros)]
macro_rules! hash_set {
    ( $( $v:expr ),* $(,)? ) => {{
        #[allow(unused_mut)]
        let mut set = std::collections::HashSet::new();
        $( set.insert($v); )*
        set
    }};
}
