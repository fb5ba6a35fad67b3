use recordkit_api::RecordBuilder;

#[derive(Debug, Clone, Default, PartialEq, RecordBuilder)]
#[record(with, new, setters)]
pub struct Everything {
    #[record(copy)]
    id: u64,
    #[record(into)]
    label: String,
    #[record(default = "vec![1, 2, 3]")]
    weights: Vec<u8>,
    note: Option<String>,
}

fn main() {
    let mut e = Everything::new(1, "one", vec![], None);
    e.set_label("uno");
    let f = e.with_weights(vec![9]).with(|b| {
        b.set_note(Some("n".to_string()));
    });
    assert_eq!(f.label(), "uno");
    assert_eq!(Everything::builder().build().unwrap().weights(), &vec![1, 2, 3]);
}
