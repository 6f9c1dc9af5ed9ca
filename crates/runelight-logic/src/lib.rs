//! Pure game rules for Runelight.
//!
//! This crate contains the rules of the tile world that do not depend on the
//! ECS, on randomness, or on any I/O. Functions take plain data and return
//! results, which keeps them unit-testable and reusable by the engine, the
//! headless harness, and any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`combat`] | Max-hit formulas, kill rewards, death penalty |
//! | [`commands`] | Chat line parsing into typed commands |
//! | [`geometry`] | Grid cells, facing, Manhattan/Chebyshev distance |
//! | [`items`] | Fixed-capacity slot containers and equipment slots |
//! | [`pathfinding`] | 4-directional A* over any walkability map |
//! | [`shop`] | Trader catalogue, buying and selling |
//! | [`skills`] | Ten skills with experience and single-step level-ups |
//! | [`templates`] | Resource, monster and dialogue templates |
//! | [`tiles`] | Terrain tile types and their walkable flag |
//! | [`zones`] | Named zones derived from distance to the town centre |

pub mod combat;
pub mod commands;
pub mod geometry;
pub mod items;
pub mod pathfinding;
pub mod shop;
pub mod skills;
pub mod templates;
pub mod tiles;
pub mod zones;
