//! Every buffer allocated during a transliteration is released by the time
//! the call returns (or its result is dropped).

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use lex_translit::{transliterate, transliterate_str, Direction};

struct Counting;

thread_local! {
    // Per-thread so the test harness's own threads do not interfere.
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    // `try_with` fails during thread teardown; those frees are not ours.
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let p = System.alloc(layout);
        if !p.is_null() {
            adjust(layout.size() as isize);
        }
        p
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        adjust(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let p = System.realloc(ptr, layout, new_size);
        if !p.is_null() {
            adjust(new_size as isize - layout.size() as isize);
        }
        p
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE.with(Cell::get)
}

/// Run `f` once to initialise lazy globals, then `n` more times and return
/// the net change in live bytes.
fn net_after(n: usize, mut f: impl FnMut()) -> isize {
    f();
    let before = live();
    for _ in 0..n {
        f();
    }
    live() - before
}

#[test]
fn successful_calls_return_to_baseline() {
    let delta = net_after(100, || {
        let out = transliterate("Latin-Katakana", Direction::Forward, b"Compyutaa").unwrap();
        assert_eq!(out.to_str().unwrap(), "コンピュタア");
    });
    assert_eq!(delta, 0);
}

#[test]
fn growing_calls_return_to_baseline() {
    // Kana → Latin needs several retries at every stage.
    let delta = net_after(100, || {
        let out = transliterate_str("Latin-Hiragana", Direction::Reverse, "しゃしんをとっちゃった")
            .unwrap();
        assert_eq!(out, "shashinwotocchatta");
    });
    assert_eq!(delta, 0);
}

#[test]
fn failing_calls_return_to_baseline() {
    let delta = net_after(100, || {
        assert!(transliterate("Latin-Klingon", Direction::Forward, b"abc").is_err());
        assert!(transliterate("Any-Null", Direction::Forward, b"ab\xFF").is_err());
        assert!(transliterate("Any-Null", Direction::Reverse, b"").is_ok());
    });
    assert_eq!(delta, 0);
}
