// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod common;

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::common::{
    CaptureLinkLayer,
    Counters,
    Fault,
    CAPTURE_IFNAME,
    DEFAULT_HEADER,
};
use ::anyhow::Result;
use ::crossbeam_channel::Receiver;
use ::ethersend::{
    ethersend::config::{
        default_payload,
        FRAME_COUNT,
    },
    Fail,
    FailKind,
    FrameSender,
    SenderConfig,
};
use ::std::{
    cell::RefCell,
    rc::Rc,
};

//======================================================================================================================
// Helper Functions
//======================================================================================================================

const DST: [u8; 6] = [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF];
const SRC: [u8; 6] = [0x52, 0x54, 0x00, 0x12, 0x34, 0x57];
const ETHER_TYPE: [u8; 2] = [0x80, 0x00];

/// Checks that every endpoint opened so far was released exactly once.
fn ensure_released(counters: &Rc<RefCell<Counters>>) -> Result<()> {
    let counters = counters.borrow();
    anyhow::ensure!(
        counters.opens == counters.releases,
        "leaked endpoints (opens={:?} releases={:?})",
        counters.opens,
        counters.releases
    );
    Ok(())
}

fn expect_kind(result: Result<(), Fail>, kind: FailKind) -> Result<()> {
    match result {
        Err(e) if e.kind == kind => Ok(()),
        Err(e) => anyhow::bail!("expected {:?} (error={:?})", kind, e),
        Ok(()) => anyhow::bail!("expected {:?} but send succeeded", kind),
    }
}

//======================================================================================================================
// Frame Layout
//======================================================================================================================

/// Sends the default test frame once and checks it byte by byte.
#[test]
fn send_default_frame() -> Result<()> {
    let (link_layer, incoming, counters) = CaptureLinkLayer::new(None);
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);

    sender.send(CAPTURE_IFNAME, &DST, &SRC, &ETHER_TYPE, &default_payload())?;

    let frame: Vec<u8> = incoming.try_recv()?;
    anyhow::ensure!(frame.len() == 124);
    anyhow::ensure!(frame[..14] == DEFAULT_HEADER);
    anyhow::ensure!(frame[14..64].iter().all(|b| *b == 0xDD));
    anyhow::ensure!(frame[64..94].iter().all(|b| *b == 0xCC));
    anyhow::ensure!(frame[94..124].iter().all(|b| *b == 0xAA));
    anyhow::ensure!(incoming.try_recv().is_err(), "a single send should emit a single frame");

    anyhow::ensure!(counters.borrow().opens == 1);
    ensure_released(&counters)
}

/// Frames are always the 14-byte header followed by the payload, whatever its length.
#[test]
fn send_frame_length_follows_payload() -> Result<()> {
    let (link_layer, incoming, counters) = CaptureLinkLayer::new(None);
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);

    for len in [0, 1, 46, 110, 1500] {
        let payload: Vec<u8> = (0..len).map(|i| i as u8).collect();
        sender.send(CAPTURE_IFNAME, &SRC, &DST, &[0x08, 0x06], &payload)?;

        let frame: Vec<u8> = incoming.try_recv()?;
        anyhow::ensure!(frame.len() == 14 + len, "unexpected frame length for payload len={}", len);
        anyhow::ensure!(frame[0..6] == SRC);
        anyhow::ensure!(frame[6..12] == DST);
        anyhow::ensure!(frame[12..14] == [0x08, 0x06]);
        anyhow::ensure!(frame[14..] == payload[..]);
    }

    ensure_released(&counters)
}

//======================================================================================================================
// Argument Validation
//======================================================================================================================

#[test]
fn send_rejects_bad_mac_address_without_io() -> Result<()> {
    let (link_layer, _incoming, counters) = CaptureLinkLayer::new(None);
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);
    let payload: Vec<u8> = default_payload();

    for bad in [&DST[..5], &[0x11; 7][..]] {
        expect_kind(
            sender.send(CAPTURE_IFNAME, bad, &SRC, &ETHER_TYPE, &payload),
            FailKind::InvalidAddress,
        )?;
        expect_kind(
            sender.send(CAPTURE_IFNAME, &DST, bad, &ETHER_TYPE, &payload),
            FailKind::InvalidAddress,
        )?;
    }

    let counters = counters.borrow();
    anyhow::ensure!(counters.opens == 0, "no endpoint should be opened");
    anyhow::ensure!(counters.transmits == 0, "nothing should be transmitted");
    Ok(())
}

#[test]
fn send_rejects_bad_ether_type_without_io() -> Result<()> {
    let (link_layer, _incoming, counters) = CaptureLinkLayer::new(None);
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);
    let payload: Vec<u8> = default_payload();

    for bad in [&[0x80][..], &[0x80, 0x00, 0x00][..]] {
        expect_kind(
            sender.send(CAPTURE_IFNAME, &DST, &SRC, bad, &payload),
            FailKind::InvalidEtherType,
        )?;
    }

    let counters = counters.borrow();
    anyhow::ensure!(counters.opens == 0, "no endpoint should be opened");
    anyhow::ensure!(counters.transmits == 0, "nothing should be transmitted");
    Ok(())
}

//======================================================================================================================
// Failures
//======================================================================================================================

#[test]
fn send_reports_short_write() -> Result<()> {
    let (link_layer, incoming, counters) = CaptureLinkLayer::new(Some(Fault::ShortWrite));
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);

    expect_kind(
        sender.send(CAPTURE_IFNAME, &DST, &SRC, &ETHER_TYPE, &default_payload()),
        FailKind::SendError,
    )?;

    anyhow::ensure!(incoming.try_recv().is_err());
    anyhow::ensure!(counters.borrow().opens == 1);
    ensure_released(&counters)
}

#[test]
fn send_propagates_open_failure() -> Result<()> {
    let fault: Fault = Fault::Open(Fail::new(FailKind::PermissionDenied, libc::EPERM, "operation not permitted"));
    let (link_layer, _incoming, counters) = CaptureLinkLayer::new(Some(fault));
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);

    expect_kind(
        sender.send(CAPTURE_IFNAME, &DST, &SRC, &ETHER_TYPE, &default_payload()),
        FailKind::PermissionDenied,
    )?;

    let counters = counters.borrow();
    anyhow::ensure!(counters.opens == 0 && counters.releases == 0);
    anyhow::ensure!(counters.transmits == 0);
    Ok(())
}

//======================================================================================================================
// Driver
//======================================================================================================================

/// The driver emits the default frame exactly [FRAME_COUNT] times.
#[test]
fn run_sends_identical_frames() -> Result<()> {
    let (link_layer, incoming, counters) = CaptureLinkLayer::new(None);
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);
    let config: SenderConfig = SenderConfig::new(CAPTURE_IFNAME);

    let nframes: usize = sender.run(&config)?;
    anyhow::ensure!(nframes == FRAME_COUNT);

    let frames: Vec<Vec<u8>> = drain(&incoming);
    anyhow::ensure!(frames.len() == 1000, "unexpected number of frames ({})", frames.len());
    let first: &Vec<u8> = &frames[0];
    anyhow::ensure!(first.len() == 124);
    anyhow::ensure!(first[..14] == DEFAULT_HEADER);
    anyhow::ensure!(frames.iter().all(|frame| frame == first), "frames should be byte-identical");

    anyhow::ensure!(counters.borrow().transmits == 1000);
    ensure_released(&counters)
}

/// The first failed send stops the driver.
#[test]
fn run_stops_at_first_failure() -> Result<()> {
    let (link_layer, incoming, counters) = CaptureLinkLayer::new(Some(Fault::Transmit(10)));
    let sender: FrameSender<CaptureLinkLayer> = FrameSender::new(link_layer);
    let config: SenderConfig = SenderConfig::new(CAPTURE_IFNAME);

    match sender.run(&config) {
        Err(e) if e.kind == FailKind::SendError => (),
        Err(e) => anyhow::bail!("unexpected failure (error={:?})", e),
        Ok(n) => anyhow::bail!("run should fail (sent={})", n),
    }

    anyhow::ensure!(drain(&incoming).len() == 10);
    anyhow::ensure!(counters.borrow().transmits == 11);
    anyhow::ensure!(counters.borrow().opens == 11);
    ensure_released(&counters)
}

fn drain(incoming: &Receiver<Vec<u8>>) -> Vec<Vec<u8>> {
    incoming.try_iter().collect()
}
