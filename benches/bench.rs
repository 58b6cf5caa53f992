#![feature(test)]
#![allow(non_snake_case)]
extern crate test;

use diag0m2::DiagonalNet32;

fn new32_run(m: u32, b: &mut test::Bencher) {
    b.iter(|| DiagonalNet32::new(test::black_box(m)).unwrap().offsets()[0])
}

fn get32_run(m: u32, b: &mut test::Bencher) {
    let net = DiagonalNet32::new(m).unwrap();
    b.iter(|| -> u32 { net.iter().map(|[x, y]| x ^ y).fold(0, |a, p| a ^ p) })
}

fn tile32_run(m: u32, b: &mut test::Bencher) {
    let net = DiagonalNet32::new(m).unwrap();
    b.iter(|| -> u32 {
        (0..4)
            .flat_map(|py| (0..4).map(move |px| (px, py)))
            .flat_map(|(px, py)| net.tile(px, py).unwrap())
            .map(|[x, y]| x ^ y)
            .fold(0, |a, p| a ^ p)
    })
}

#[bench]
fn new32__8(b: &mut test::Bencher) {
    new32_run(8, b);
}

#[bench]
fn new32_24(b: &mut test::Bencher) {
    new32_run(24, b);
}

#[bench]
fn get32__7(b: &mut test::Bencher) {
    get32_run(7, b);
}

#[bench]
fn get32_16(b: &mut test::Bencher) {
    get32_run(16, b);
}

#[bench]
fn tile32__6(b: &mut test::Bencher) {
    tile32_run(6, b);
}

#[bench]
fn tile32_12(b: &mut test::Bencher) {
    tile32_run(12, b);
}
