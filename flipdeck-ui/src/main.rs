//! Flipdeck page
//!
//! Flip cards in the browser, built with Leptos (WASM).
//!
//! # Features
//!
//! - Add and remove cards, newest last
//! - Click a card to flip it
//! - Edit mode: select a card and set its faces from text or an image
//! - Deck persisted to `localStorage` under `savedCards` after every change
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All deck logic lives in the `flipdeck` crate; this crate
//! supplies the `localStorage` backend, browser image reading and the view.

use leptos::*;

mod app;
mod components;
mod image;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
