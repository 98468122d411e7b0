//! # 后台任务执行
//!
//! 在独立线程上执行一项工作，并把它产生的事件按顺序交回调用线程。
//!
//! ## 功能
//! - 每次调用启动一个具名线程（无线程池）
//! - 通过 `mpsc` 通道按产生顺序投递事件
//! - 通道关闭后返回工作结果，线程 panic 转为错误
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/event.rs`

use crate::error::{DeskmateError, Result};
use crate::models::Event;

use std::any::Any;
use std::sync::mpsc::{self, Sender};
use std::thread;

/// 工作线程一侧的事件发送端
#[derive(Clone)]
pub struct EventSink {
    tx: Sender<Event>,
}

impl EventSink {
    /// 发送事件；接收端已关闭时丢弃
    pub fn emit(&self, event: Event) {
        let _ = self.tx.send(event);
    }
}

/// 在后台线程执行 `work`，在当前线程上依次处理其事件
///
/// `on_event` 在调用线程中按事件产生顺序被调用；`work` 返回后
/// 通道关闭，本函数返回 `work` 的结果。
pub fn run_with_progress<T, W, P>(name: &str, work: W, mut on_event: P) -> Result<T>
where
    T: Send + 'static,
    W: FnOnce(EventSink) -> T + Send + 'static,
    P: FnMut(Event),
{
    let (tx, rx) = mpsc::channel();
    let sink = EventSink { tx };

    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || work(sink))
        .map_err(|e| DeskmateError::WorkerSpawn {
            name: name.to_string(),
            source: e,
        })?;

    tracing::debug!(task = name, "background task started");

    for event in rx {
        on_event(event);
    }

    let result = handle.join().map_err(|payload| DeskmateError::WorkerPanicked {
        name: name.to_string(),
        reason: panic_message(payload.as_ref()),
    })?;

    tracing::debug!(task = name, "background task finished");
    Ok(result)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
