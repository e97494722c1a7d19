/// Asserts that each of the expected strings occurs in `content`, in the order given.
///
/// Each search starts where the previous match ended.
#[macro_export]
macro_rules! assert_contains_inorder {
    ($content:expr, [$($expected:expr),* $(,)?]) => {{
        let content = &$content;
        let content: &str = content.as_ref();
        let mut remaining = content;
        $(
            let expected = &$expected;
            let expected: &str = expected.as_ref();
            match remaining.find(expected) {
                Some(index) => {
                    remaining = &remaining[index + expected.len()..];
                }
                None => {
                    panic!(
                        "expected content not found, or not in order. expected: {:?}, content: {:?}",
                        expected, content
                    );
                }
            }
        )*
        let _ = remaining;
    }};
}
