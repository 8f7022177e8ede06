use foodrank::FoodRatings;

fn main() {
    let mut index = FoodRatings::new(
        ["kimchi", "miso", "sushi", "moussaka", "ramen", "bulgogi"],
        ["korean", "japanese", "japanese", "greek", "japanese", "korean"],
        [9, 12, 19, 20, 9, 7],
    )
    .expect("failed to build index");

    println!("{index}");

    for cuisine in ["japanese", "korean", "greek"] {
        match index.highest_rated(cuisine) {
            Ok(food) => println!("Top {cuisine}: {food}"),
            Err(e) => println!("{e}"),
        }
    }

    index.change_rating("ramen", 16).expect("ramen is on the menu");
    index.change_rating("kimchi", 4).expect("kimchi is on the menu");

    println!();
    for cuisine in ["japanese", "korean"] {
        let ranking: Vec<String> = index
            .ranking(cuisine)
            .into_iter()
            .flatten()
            .map(|r| r.to_string())
            .collect();
        println!("{cuisine}: {}", ranking.join(", "));
    }

    if let Err(e) = index.change_rating("pizza", 10) {
        println!("\n{e}");
    }
}
