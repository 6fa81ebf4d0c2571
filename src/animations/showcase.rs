//! Built-in demo animation.
//!
//! A short piece that walks through every authoring tool: plain fills,
//! style masks, choreography tables with custom steps, text reveals and a
//! line sweep.

use crate::animations::Animation;
use crate::authoring::{
    animating_line, Append, AuthoringSession, BeatStamp, FillOp, LineSpec, Step, TextReveal,
};
use crate::player::FrameRate;
use crate::terminal::{Color, Frame, Style, StyleMap};
use crate::version;

const WIDTH: usize = 79;
const HEIGHT: usize = 24;

const CALENDAR: &str = "\
    October  2026
 Su Mo Tu We Th Fr Sa
              1  2  3
  4  5  6  7  8  9 10
 11 12 13 14 15 16 17
 18 19 20 21 22 23 24
 25 26 27 28 29 30 31";

// R: weekend, T: today
const CALENDAR_MASK: &str = "
 RR                RR
 RR                RR
 RR                RR
 RR                RR
 RR TT             RR
 RR                RR";

/// The demo shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Showcase;

impl Showcase {
    fn intro(&self, session: &mut AuthoringSession, frame: &mut Frame) {
        frame.fill_text("TITLE: asciipv showcase", 2, 21, Some(Color::BrightMagenta), None);
        frame.fill_text("PV: asciipv", 2, 22, Some(Color::Yellow), None);
        session.hold(frame, 4);

        let styles = StyleMap::from([
            ('R', Style::fg(Color::Red)),
            ('T', Style::new(Color::Black, Color::White)),
        ]);
        frame.fill_text(CALENDAR, 52, 2, None, None);
        frame.fill_style(CALENDAR_MASK, &styles, 52, 2);
        session.hold(frame, 4);
    }

    fn verse(&self, session: &mut AuthoringSession, frame: &mut Frame) {
        let wipe_title = Step::custom(|f: &mut Frame| {
            f.fill_text(&" ".repeat(30), 2, 21, None, None);
            f.fill_text(&" ".repeat(30), 2, 22, None, None);
        });
        let groups: Vec<Vec<Step>> = vec![
            vec![wipe_title],
            vec![Step::text("Every", 4, 6)],
            vec![Step::text("frame", 10, 6)],
            vec![],
            vec![FillOp::new("is", 16, 6).fg(Color::Cyan).into()],
            vec![FillOp::new("drawn", 19, 6).fg(Color::Cyan).into()],
            vec![Step::text("ahead", 4, 7), Step::text("of", 10, 7)],
            vec![FillOp::new("time.", 13, 7).fg(Color::BrightYellow).into()],
        ];
        session.perform(frame, &groups);

        TextReveal::new("Played back on the beat,", 6, 4, 10)
            .fg(Color::Green)
            .popup(session, frame, Append::Beat);
        TextReveal::new("never drifting.", 4, 4, 12)
            .fg(Color::BrightGreen)
            .drop_in(session, frame, Append::Beat);
        session.hold(frame, 2);
    }

    fn bridge(&self, session: &mut AuthoringSession, frame: &mut Frame) {
        animating_line(session, frame, LineSpec::vertical(40, Color::Blue), Append::Beat);
        animating_line(session, frame, LineSpec::cross(40, 15, Color::Magenta), Append::Beat);

        frame.fill_text("\u{8}\u{8}<3", 40, 15, Some(Color::BrightRed), None);
        session.hold(frame, 2);
    }

    fn ending(&self, session: &mut AuthoringSession, frame: &mut Frame) {
        frame.fill_text("Fine.", 73, 23, Some(Color::Default), None);
        session.push(frame);
        frame.clear();
        frame.fill_text("Fine.", 37, 11, None, None);
        session.push(frame);
    }
}

impl Animation for Showcase {
    fn title(&self) -> &str {
        "asciipv showcase"
    }

    fn credits(&self) -> String {
        format!("asciipv {}", version::version_string())
    }

    fn size(&self) -> (usize, usize) {
        (WIDTH, HEIGHT)
    }

    fn frame_rate(&self) -> FrameRate {
        FrameRate::per_second(6)
    }

    fn beat_stamp(&self) -> BeatStamp {
        BeatStamp::new(73, 23, Color::Blue)
    }

    fn compose(&self, session: &mut AuthoringSession) {
        let mut frame = self.blank_frame();
        self.intro(session, &mut frame);
        self.verse(session, &mut frame);
        self.bridge(session, &mut frame);
        self.ending(session, &mut frame);
    }
}
