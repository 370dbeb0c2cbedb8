//! A deterministic Vietnamese lunisolar almanac.
//!
//! Given a solar date, and optionally a birth profile, this crate derives the
//! traditional calendar facts: Can Chi pillars, solar terms, Hoàng Đạo days
//! and hours with 0-100 scores, the Bát Tự four pillars with their element
//! balance, and a daily horoscope and advice. Every "random" choice is a
//! hash of its inputs, so the same question always gets the same answer.
//!
//! Lunar dates come through the [`lunar::LunarDateProvider`] trait;
//! [`lunar::vietnamese::VietnameseCalendar`] is the built-in one, valid for
//! 1800 to 2199 at the Vietnamese offset (UTC+7) by default.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use hoangdao::Date;
//! use hoangdao::sexagenary::CanChi;
//!
//! let date = Date::from_gregorian(2024, 2, 10).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!("Giáp Thìn", CanChi::from_cycle(date.sexagenary()).to_string());
//! ```
//!
//! Lunar calendar:
//!
//! ```
//! use hoangdao::Date;
//! use hoangdao::lunar::{lunar_info, vietnamese::VietnameseCalendar};
//!
//! let date = Date::from_gregorian(2024, 2, 10).unwrap();
//! let info = lunar_info(&VietnameseCalendar::default(), date).unwrap();
//!
//! assert_eq!((1, 1, 2024), (info.lunar_date.day, info.lunar_date.month, info.lunar_date.year));
//! assert_eq!("Giáp Thìn", info.year_can_chi);
//! ```
//!
//! Four pillars of a birth:
//!
//! ```
//! use hoangdao::bazi::calculate_bazi;
//! use hoangdao::lunar::vietnamese::VietnameseCalendar;
//! use hoangdao::profile::{Gender, UserProfile};
//!
//! let profile = UserProfile {
//!     full_name: "Lê Minh Tuấn".into(),
//!     gender: Gender::Nam,
//!     dob_solar: "1990-05-12".into(),
//!     birth_time: "08:30".into(),
//!     birth_place: "Hà Nội".into(),
//! };
//! let bazi = calculate_bazi(&VietnameseCalendar::default(), &profile).unwrap();
//!
//! assert_eq!("Lộ Bàng Thổ", bazi.destiny);
//! assert_eq!("18/4 - Canh Ngọ", bazi.lunar_equivalent);
//! ```

pub mod advice;
pub mod astro;
pub mod bazi;
pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod hoang_dao;
pub mod horoscope;
pub mod lunar;
pub mod moon;
pub mod profile;
pub mod relations;
pub mod selector;
pub mod sexagenary;
pub mod solar_term;

pub use crate::config::AlmanacConfig;
pub use date::Date;
pub use error::{AlmanacError, Result};
pub use lunar::{LunarDate, LunarDateProvider, LunarInfo};
pub use sexagenary::{Can, CanChi, Chi, Element};
