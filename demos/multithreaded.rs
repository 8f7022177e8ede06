use std::thread;

use foodrank::{FoodRatingsBuilder, SharedFoodRatings};

fn main() {
    let index: SharedFoodRatings = FoodRatingsBuilder::new()
        .food("kimchi", "korean", 9)
        .food("bulgogi", "korean", 7)
        .food("bibimbap", "korean", 8)
        .build()
        .expect("failed to build index")
        .into();

    // Each thread votes a different dish up.
    let handles: Vec<_> = ["kimchi", "bulgogi", "bibimbap"]
        .into_iter()
        .enumerate()
        .map(|(i, food)| {
            let index = index.clone();
            thread::spawn(move || {
                index
                    .change_rating(food, 10 + i as i32)
                    .expect("food is on the menu");
                (food, index.highest_rated("korean").expect("korean exists"))
            })
        })
        .collect();

    for h in handles {
        let (food, top) = h.join().expect("thread panicked");
        println!("after updating {food}: top korean is {top}");
    }

    println!(
        "final top korean: {}",
        index.highest_rated("korean").expect("korean exists")
    );
}
