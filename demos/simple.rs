use arenatable::ArenaTable;

fn main() {
    let mut table = ArenaTable::<String>::with_capacity(8);

    table.insert("greeting", "hello".to_string()).unwrap();

    assert!(table.contains_key("greeting"));

    let value = table.get("greeting");

    println!("Value: {value:?}");
    println!("Load: {}", table.load());
}
