// Latest-value hand-off between the analyzer and the frame loop.

use std::thread;

use app_core::BinMailbox;

#[test]
fn reads_only_newer_snapshots() {
    let mailbox = BinMailbox::new();
    let mut bins = Vec::new();
    assert_eq!(mailbox.read_newer(0, &mut bins), None);

    mailbox.publish(&[1.0, 2.0, 3.0]);
    let seq = mailbox.read_newer(0, &mut bins).unwrap();
    assert_eq!(bins, vec![1.0, 2.0, 3.0]);
    assert_eq!(mailbox.read_newer(seq, &mut bins), None);
}

#[test]
fn overwrites_instead_of_queueing() {
    let mailbox = BinMailbox::new();
    mailbox.publish(&[1.0]);
    mailbox.publish(&[2.0, 2.0]);
    mailbox.publish(&[3.0]);
    let mut bins = vec![9.0; 8];
    assert_eq!(mailbox.read_newer(0, &mut bins), Some(3));
    assert_eq!(bins, vec![3.0]);
}

#[test]
fn publishes_across_threads() {
    let mailbox = BinMailbox::shared();
    let writer = {
        let mailbox = mailbox.clone();
        thread::spawn(move || {
            for i in 0..100 {
                mailbox.publish(&[i as f32; 4]);
            }
        })
    };
    writer.join().unwrap();
    assert_eq!(mailbox.sequence(), 100);
    let mut bins = Vec::new();
    mailbox.read_newer(0, &mut bins);
    assert_eq!(bins, vec![99.0; 4]);
}
