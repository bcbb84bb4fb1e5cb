#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM 3x2, ASCII and binary
    fs::write(format!("{dir}/pbm_ascii_3x2.pbm"), b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
    fs::write(format!("{dir}/pbm_10x1.pbm"), b"P4\n10 1\n\xff\xc0").unwrap();

    // PGM with comments, and a 16-bit binary one
    let pgm = b"P2\n# comment\n3 2\n# max\n15\n0 5 10\n15 7 3\n";
    fs::write(format!("{dir}/pgm_ascii_3x2.pgm"), pgm).unwrap();
    let pgm16 = b"P5\n2 1\n1000\n\x01\x02\x03\xe7";
    fs::write(format!("{dir}/pgm16_2x1.pgm"), pgm16).unwrap();

    // PPM 2x2, ASCII and binary
    let ppm = b"P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 128 128 128\n";
    fs::write(format!("{dir}/ppm_ascii_2x2.ppm"), ppm).unwrap();
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p1_bad_digit.bin"), b"P1\n2 1\n0 2\n").unwrap();
    fs::write(format!("{dir}/p5_short.bin"), b"P5\n4 4\n255\n\x00").unwrap();
    fs::write(format!("{dir}/p2_zero_max.bin"), b"P2\n1 1\n0\n0\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
