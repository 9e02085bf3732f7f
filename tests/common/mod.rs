// Board builders shared by the integration tests

#![allow(dead_code)]

use hunter_snake::types::{Battlesnake, Board, Coord};

pub fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
    cells.iter().map(|&(x, y)| Coord { x, y }).collect()
}

pub fn snake(id: &str, health: i32, body: &[(i32, i32)]) -> Battlesnake {
    let body = coords(body);
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: String::new(),
    }
}

pub fn board(width: i32, height: i32, food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
    Board {
        height,
        width,
        food: coords(food),
        snakes,
        hazards: vec![],
    }
}
