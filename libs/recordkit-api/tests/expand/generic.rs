use recordkit_api::{Record, RecordBuilder};

#[derive(Clone, RecordBuilder)]
#[record(with)]
pub struct Window<'a, T: Clone + Default, const N: usize> {
    title: &'a str,
    cells: [T; N],
}

fn rebuild<R: Record>(record: &R) -> R {
    recordkit_api::copy_with(record, |_| {}).unwrap()
}

fn main() {
    let w: Window<'_, u8, 2> = Window::builder().title("main").build().unwrap();
    let v = rebuild(&w.with_cells([1, 2]));
    assert_eq!(v.cells(), &[1, 2]);
    assert_eq!(*v.title(), "main");
}
