use recordkit_api::RecordBuilder;

#[derive(Debug, Clone, PartialEq, RecordBuilder)]
#[record(with, new)]
pub struct Holder<F> {
    inner: F,
    #[record(copy)]
    count: u8,
}

fn main() {
    let first = Holder::new("alpha", 1);
    let second = first.with(|staged| {
        staged.set_count(2);
    });
    assert_eq!(*second.inner(), "alpha");
    assert_eq!(second.count(), 2);
    assert_eq!(first.with_inner("beta").count(), 1);
}
