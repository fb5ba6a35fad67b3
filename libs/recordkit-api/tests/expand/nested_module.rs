mod model {
    use recordkit_api::RecordBuilder;

    #[derive(Clone, RecordBuilder)]
    #[record(with)]
    pub(crate) struct Point {
        #[record(copy)]
        x: i32,
        #[record(copy, required)]
        y: i32,
    }
}

use model::{Point, PointBuilder};

fn main() {
    let p = Point::builder().x(1).y(2).build().unwrap();
    let q = p.with_x(5);
    assert_eq!((q.x(), q.y()), (5, 2));
    assert!(PointBuilder::new().x(1).build().is_err());
}
