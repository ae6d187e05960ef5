//! Monochrome OLED backend for the pong game
//!
//! This crate provides:
//! - `FrameBuffer`, a 128x64 1bpp buffer in SH1106 page layout that
//!   implements `embedded_graphics::DrawTarget`
//! - `GraphicsCanvas`, an adapter that implements the game's
//!   `DisplayDriver` trait on top of any binary-color draw target
//! - `Sh1106`, an async I2C driver that pushes a frame buffer to the panel
//!
//! # Colors
//!
//! The panel has one bit per pixel. The four game colors map onto fill
//! patterns so the menu and pause screens stay distinguishable:
//!
//! | Color | Pattern |
//! |-------|---------|
//! | Black | all off |
//! | White | all on |
//! | Blue  | checkerboard |
//! | Red   | horizontal stripes |

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod framebuffer;
pub mod sh1106;

pub use canvas::GraphicsCanvas;
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use sh1106::Sh1106;
