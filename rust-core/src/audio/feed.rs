//! Lock-free hand-off of render-thread audio into an analysis channel
//!
//! The render thread pushes every cycle without locking. The UI thread
//! drains the newest cache-sized window into the [`AnalyseChannel`] right
//! before retrieving its spectrum.

use ringbuf::{HeapConsumer, HeapProducer, HeapRb};

use crate::codec::{resampled_len, PcmBuffer};
use crate::spectrum::AnalyseChannel;

/// Single-producer single-consumer sample ring
pub struct AnalyseFeed {
    producer: HeapProducer<f64>,
    consumer: HeapConsumer<f64>,
    capacity: usize,
}

impl AnalyseFeed {
    /// Create a ring holding up to `capacity` samples
    pub fn new(capacity: usize) -> Self {
        let rb = HeapRb::<f64>::new(capacity);
        let (producer, consumer) = rb.split();

        Self {
            producer,
            consumer,
            capacity,
        }
    }

    /// Split into the render-thread and UI-thread ends
    pub fn split(self) -> (FeedProducer, FeedConsumer) {
        (
            FeedProducer {
                producer: self.producer,
                capacity: self.capacity,
            },
            FeedConsumer {
                consumer: self.consumer,
                scratch: Vec::new(),
                capacity: self.capacity,
            },
        )
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Render-thread end
pub struct FeedProducer {
    producer: HeapProducer<f64>,
    capacity: usize,
}

impl FeedProducer {
    /// Push samples, returning how many fit
    ///
    /// Samples that do not fit are dropped; the consumer only needs the
    /// newest window.
    pub fn push(&mut self, samples: &[f64]) -> usize {
        self.producer.push_slice(samples)
    }

    pub fn free_len(&self) -> usize {
        self.producer.free_len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// UI-thread end
pub struct FeedConsumer {
    consumer: HeapConsumer<f64>,
    scratch: Vec<f64>,
    capacity: usize,
}

impl FeedConsumer {
    /// Move the newest window of pending samples into `channel`
    ///
    /// `samplerate` is the rate of the pushed samples. The window covers one
    /// cache buffer at that rate; older samples are discarded. Returns the
    /// number of samples handed to the channel.
    pub fn drain_into(&mut self, channel: &AnalyseChannel, samplerate: u32) -> usize {
        let pending = self.consumer.len();
        if pending == 0 {
            return 0;
        }

        let window = resampled_len(
            channel.cache_buffer_size(),
            channel.cache_samplerate(),
            samplerate,
        )
        .max(1);
        let keep = pending.min(window);

        self.consumer.skip(pending - keep);

        self.scratch.resize(keep, 0.0);
        let read = self.consumer.pop_slice(&mut self.scratch);

        channel.buffer_add(PcmBuffer::Double(&self.scratch[..read]), samplerate, read);

        read
    }

    pub fn len(&self) -> usize {
        self.consumer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
