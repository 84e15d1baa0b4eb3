#![allow(non_snake_case)]

use campusgate::client;

fn main() {
    dioxus::launch(client::App);
}
