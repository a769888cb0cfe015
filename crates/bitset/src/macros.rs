/// Convert an index to a usize using TryInto, or `None` if it doesn't fit.
macro_rules! try_usize {
    ($e:expr) => {
        <_ as TryInto<usize>>::try_into($e).ok()
    };
}
pub(crate) use try_usize;

#[cfg(test)]
mod tests {
    #[test]
    fn converts() {
        assert_eq!(try_usize!(3u8), Some(3));
        assert_eq!(try_usize!(7i64), Some(7));
        assert_eq!(try_usize!(-1i32), None);
    }
}
